//! Core module for solar_almanac
//!
//! This module provides the catalog model, its persistence capability, and
//! the rule-based query interpreter.
//!
//! # Architecture
//!
//! - `models`: Satellite, Body, Catalog, and the runtime Config
//! - `defaults`: the built-in solar system catalog
//! - `error`: Error types using thiserror
//! - `store`: CatalogStore trait with placeholder and JSON file backends
//! - `interpreter`: ordered (predicate, handler) rule table

pub mod models;
pub mod defaults;
pub mod error;
pub mod store;
pub mod interpreter;

// Re-export commonly used types
pub use models::{Body, Catalog, Config, Satellite, StoreKind};
pub use defaults::default_catalog;
pub use error::{AlmanacError, Result, ResultExt};
pub use store::{
    store_for, BodyRecord, CatalogDocument, CatalogStore, JsonFileStore, LoadOutcome,
    PlaceholderStore, SatelliteRecord,
};
pub use interpreter::{answer, Intent, Interpretation, ParsedQuery, QueryInterpreter, Rule};
