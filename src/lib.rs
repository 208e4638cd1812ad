//! solar_almanac - answer plain-text questions about the planets
//!
//! A small fixed catalog of bodies (mass, distance from the Sun, moons) is
//! queried through a rule-based keyword matcher. The library is consumed by:
//! - The CLI binary (src/bin/almanac.rs)
//! - Any other shell that can forward a line of text and show a string
//!
//! # Architecture
//!
//! This crate follows the "Library-First" pattern:
//! - **core**: catalog model, persistence capability, query interpreter
//! - **app**: one-time catalog bootstrap with default fallback
//! - **shell**: prompt loop and form-style transcript
//! - **bin/almanac.rs**: thin wrapper that parses flags and wires it together
//!
//! # Example
//!
//! ```rust
//! use solar_almanac::{answer, default_catalog};
//!
//! let catalog = default_catalog();
//! assert_eq!(
//!     answer("How far is Earth from the Sun?", &catalog),
//!     "Earth is 149.6 million km from the Sun."
//! );
//! ```

pub mod app;
pub mod core;
pub mod shell;

pub use app::{Almanac, CatalogOrigin};
pub use crate::core::{
    answer, default_catalog, AlmanacError, Body, Catalog, CatalogStore, Config, Intent,
    Interpretation, JsonFileStore, LoadOutcome, PlaceholderStore, QueryInterpreter, Result,
    Satellite, StoreKind,
};
pub use shell::{PromptLoop, SessionStats, Transcript};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
