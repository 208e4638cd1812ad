//! Catalog Store - persistence capability
//!
//! The catalog itself knows nothing about files. Persistence is a capability
//! behind the `CatalogStore` trait, so a different backend can be swapped in
//! without touching the interpreter.
//!
//! # Backends
//!
//! - `PlaceholderStore`: saves nothing, never loads (`LoadOutcome::Unsupported`)
//! - `JsonFileStore`: pretty-printed JSON document on disk
//!
//! A load that finds nothing is not an error. Callers treat
//! `NotFound` / `Unsupported` as the normal case and build defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{AlmanacError, Result, ResultExt};
use super::models::{Body, Catalog, Config, Satellite, StoreKind};

#[cfg(test)]
use mockall::automock;

/// Document format version written by `JsonFileStore`
pub const DOCUMENT_VERSION: &str = "1.0";

/// Result of asking a store for a catalog
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// A catalog was read
    Loaded(Catalog),
    /// The backing file does not exist yet
    NotFound,
    /// The store cannot load at all
    Unsupported,
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }

    /// Take the catalog, if one was loaded
    pub fn into_catalog(self) -> Option<Catalog> {
        match self {
            LoadOutcome::Loaded(catalog) => Some(catalog),
            LoadOutcome::NotFound | LoadOutcome::Unsupported => None,
        }
    }
}

/// Save/load capability for a catalog
///
/// This trait allows for mocking in tests and alternative backends.
#[cfg_attr(test, automock)]
pub trait CatalogStore {
    /// Persist the full catalog including nested satellites
    fn save(&self, catalog: &Catalog) -> Result<()>;

    /// Restore a catalog, or report why none is available
    fn load(&self) -> Result<LoadOutcome>;

    /// Short human-readable description for logs
    fn describe(&self) -> String;
}

/// Build the store selected by the configuration
pub fn store_for(config: &Config) -> Box<dyn CatalogStore> {
    match config.store {
        StoreKind::Json => Box::new(JsonFileStore::new(&config.data_file)),
        StoreKind::Placeholder => Box::new(PlaceholderStore),
    }
}

// =============================================================================
// Placeholder backend
// =============================================================================

/// Store that does nothing: `save` succeeds silently, `load` is unsupported
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderStore;

impl CatalogStore for PlaceholderStore {
    fn save(&self, _catalog: &Catalog) -> Result<()> {
        Ok(())
    }

    fn load(&self) -> Result<LoadOutcome> {
        Ok(LoadOutcome::Unsupported)
    }

    fn describe(&self) -> String {
        "placeholder store (no persistence)".to_string()
    }
}

// =============================================================================
// JSON document records
// =============================================================================

/// On-disk satellite record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatelliteRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diameter: Option<f64>,
}

/// On-disk body record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyRecord {
    pub name: String,
    pub mass: f64,
    pub distance_from_sun: f64,
    #[serde(default)]
    pub moons: Vec<SatelliteRecord>,
}

/// Full persisted document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Document version for future migrations
    #[serde(default = "default_version")]
    pub version: String,
    /// When the document was written (RFC 3339)
    #[serde(default)]
    pub saved_at: String,
    pub planets: Vec<BodyRecord>,
}

fn default_version() -> String {
    DOCUMENT_VERSION.to_string()
}

impl From<&Satellite> for SatelliteRecord {
    fn from(satellite: &Satellite) -> Self {
        Self {
            name: satellite.name.clone(),
            diameter: satellite.diameter,
        }
    }
}

impl From<SatelliteRecord> for Satellite {
    fn from(record: SatelliteRecord) -> Self {
        Self {
            name: record.name,
            diameter: record.diameter,
        }
    }
}

impl From<&Body> for BodyRecord {
    fn from(body: &Body) -> Self {
        Self {
            name: body.name.clone(),
            mass: body.mass,
            distance_from_sun: body.distance_from_sun,
            moons: body.satellites.iter().map(SatelliteRecord::from).collect(),
        }
    }
}

impl From<BodyRecord> for Body {
    fn from(record: BodyRecord) -> Self {
        Self {
            name: record.name,
            mass: record.mass,
            distance_from_sun: record.distance_from_sun,
            satellites: record.moons.into_iter().map(Satellite::from).collect(),
        }
    }
}

impl CatalogDocument {
    /// Snapshot a catalog, stamping the current time
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            version: default_version(),
            saved_at: chrono::Utc::now().to_rfc3339(),
            planets: catalog.iter().map(BodyRecord::from).collect(),
        }
    }

    pub fn into_catalog(self) -> Catalog {
        self.planets.into_iter().map(Body::from).collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// =============================================================================
// JSON file backend
// =============================================================================

/// Store backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for JsonFileStore {
    fn save(&self, catalog: &Catalog) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| AlmanacError::store_failure(&self.path, e.to_string()))?;
            }
        }

        let json = CatalogDocument::from_catalog(catalog).to_json()?;
        fs::write(&self.path, json)
            .map_err(|e| AlmanacError::store_failure(&self.path, e.to_string()))?;

        log::debug!("saved {} bodies to {}", catalog.len(), self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<LoadOutcome> {
        if !self.path.exists() {
            return Ok(LoadOutcome::NotFound);
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| AlmanacError::store_failure(&self.path, e.to_string()))?;
        let document = CatalogDocument::from_json(&content)
            .context(format!("parsing {}", self.path.display()))?;

        Ok(LoadOutcome::Loaded(document.into_catalog()))
    }

    fn describe(&self) -> String {
        format!("JSON file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::defaults::default_catalog;
    use tempfile::tempdir;

    #[test]
    fn test_placeholder_load_is_unsupported() {
        let store = PlaceholderStore;
        assert_eq!(store.load().unwrap(), LoadOutcome::Unsupported);
        assert!(store.save(&default_catalog()).is_ok());
        // Saving still does not make anything loadable
        assert_eq!(store.load().unwrap(), LoadOutcome::Unsupported);
    }

    #[test]
    fn test_body_record_conversion() {
        let body = Body::new("Mars", 0.642, 227.9)
            .with_satellite(Satellite::new("Phobos", 22.0))
            .with_satellite(Satellite::named("Deimos"));

        let record = BodyRecord::from(&body);
        assert_eq!(record.name, "Mars");
        assert_eq!(record.mass, 0.642);
        assert_eq!(record.distance_from_sun, 227.9);
        assert_eq!(record.moons.len(), 2);
        assert_eq!(record.moons[0].name, "Phobos");

        assert_eq!(Body::from(record), body);
    }

    #[test]
    fn test_document_parses_minimal_layout() {
        let json = r#"{
            "planets": [{
                "name": "Jupiter",
                "mass": 1898,
                "distance_from_sun": 778.5,
                "moons": [
                    {"name": "Io", "diameter": 3643},
                    {"name": "Europa"}
                ]
            }]
        }"#;

        let catalog = CatalogDocument::from_json(json).unwrap().into_catalog();
        let jupiter = catalog.find_by_name("Jupiter").unwrap();
        assert_eq!(jupiter.mass, 1898.0);
        assert_eq!(jupiter.satellites[0].diameter, Some(3643.0));
        assert_eq!(jupiter.satellites[1].diameter, None);
    }

    #[test]
    fn test_missing_diameter_is_not_serialized() {
        let record = SatelliteRecord::from(&Satellite::named("Nereid"));
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Nereid"}"#);
    }

    #[test]
    fn test_json_store_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert_eq!(store.load().unwrap(), LoadOutcome::NotFound);
    }

    #[test]
    fn test_json_store_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("data").join("planets.json");
        let store = JsonFileStore::new(&path);

        store.save(&default_catalog()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_json_store_malformed_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_store_for_config() {
        let config = Config {
            store: StoreKind::Placeholder,
            ..Config::default()
        };
        assert!(store_for(&config).describe().contains("placeholder"));

        let config = Config::default();
        assert!(store_for(&config).describe().contains("planet_data.json"));
    }
}
