//! Core data models for solar_almanac
//!
//! This module contains the catalog of bodies and satellites that every
//! query is answered against, plus the runtime configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use super::error::{AlmanacError, Result, ResultExt};

/// A named moon belonging to exactly one body
#[derive(Debug, Clone, PartialEq)]
pub struct Satellite {
    /// Moon name
    pub name: String,
    /// Mean diameter in kilometers, when known
    pub diameter: Option<f64>,
}

impl Satellite {
    /// Create a satellite with a known diameter
    pub fn new(name: impl Into<String>, diameter: f64) -> Self {
        Self {
            name: name.into(),
            diameter: Some(diameter),
        }
    }

    /// Create a satellite without a diameter
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            diameter: None,
        }
    }
}

impl fmt::Display for Satellite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.diameter {
            Some(d) => write!(f, "{} (diameter: {} km)", self.name, d),
            None => write!(f, "{}", self.name),
        }
    }
}

/// A planet or dwarf planet in the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Display name, matched case-insensitively
    pub name: String,
    /// Mass in units of 10^24 kg
    pub mass: f64,
    /// Mean distance from the Sun in million km
    pub distance_from_sun: f64,
    /// Moons in display order
    pub satellites: Vec<Satellite>,
}

impl Body {
    /// Create a body with no satellites
    pub fn new(name: impl Into<String>, mass: f64, distance_from_sun: f64) -> Self {
        Self {
            name: name.into(),
            mass,
            distance_from_sun,
            satellites: Vec::new(),
        }
    }

    /// Builder pattern: append a satellite
    pub fn with_satellite(mut self, satellite: Satellite) -> Self {
        self.satellites.push(satellite);
        self
    }

    /// Append a satellite, keeping insertion order
    pub fn add_satellite(&mut self, satellite: Satellite) {
        self.satellites.push(satellite);
    }

    pub fn satellite_count(&self) -> usize {
        self.satellites.len()
    }

    /// Satellite names in stored order
    pub fn satellite_names(&self) -> Vec<&str> {
        self.satellites.iter().map(|s| s.name.as_str()).collect()
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let moons = if self.satellites.is_empty() {
            "No moons".to_string()
        } else {
            self.satellite_names().join(", ")
        };
        writeln!(f, "Planet: {}", self.name)?;
        writeln!(f, "Mass: {} × 10^24 kg", self.mass)?;
        writeln!(f, "Distance from Sun: {} million km", self.distance_from_sun)?;
        write!(f, "Moons: {}", moons)
    }
}

/// Ordered collection of bodies.
///
/// Insertion order is listing order. Names are expected to be unique but
/// this is not checked; lookups return the first match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    bodies: Vec<Body>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a body (no duplicate check)
    pub fn add_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    /// Body names in insertion order
    pub fn all_names(&self) -> Vec<&str> {
        self.bodies.iter().map(|b| b.name.as_str()).collect()
    }

    /// Case-insensitive exact name lookup
    pub fn find_by_name(&self, name: &str) -> Option<&Body> {
        let wanted = name.to_lowercase();
        self.bodies.iter().find(|b| b.name.to_lowercase() == wanted)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl FromIterator<Body> for Catalog {
    fn from_iter<I: IntoIterator<Item = Body>>(iter: I) -> Self {
        Self {
            bodies: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}

/// Which catalog store backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// Pretty-printed JSON document on disk
    #[default]
    Json,
    /// No-op store: saves nothing, never loads
    Placeholder,
}

impl StoreKind {
    /// Parse store kind from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" | "file" => Some(StoreKind::Json),
            "placeholder" | "none" => Some(StoreKind::Placeholder),
            _ => None,
        }
    }
}

/// Configuration loaded from .almanac.json
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Path of the catalog data file
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Store backend
    #[serde(default)]
    pub store: StoreKind,
    /// Save the default catalog when nothing could be loaded
    #[serde(default = "default_persist_defaults")]
    pub persist_defaults: bool,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("planet_data.json")
}

fn default_persist_defaults() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            store: StoreKind::default(),
            persist_defaults: default_persist_defaults(),
        }
    }
}

impl Config {
    /// Default config file name, looked up in the working directory
    pub const FILE_NAME: &'static str = ".almanac.json";

    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(AlmanacError::from)
            .context(format!("reading {}", path.display()))?;
        Self::from_json(&content).context(format!("parsing {}", path.display()))
    }

    /// Parse configuration from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)
            .map_err(|e| AlmanacError::invalid_config(e.to_string()))?;
        if config.data_file.as_os_str().is_empty() {
            return Err(AlmanacError::invalid_config("data_file must not be empty"));
        }
        Ok(config)
    }
}
