//! Application bootstrap
//!
//! Builds the catalog once at startup: ask the configured store, fall back to
//! the built-in solar system when it has nothing, and optionally write the
//! defaults back so the next run can load them.

use crate::core::{
    default_catalog, Catalog, CatalogStore, Config, Interpretation, LoadOutcome,
    QueryInterpreter, Result,
};

/// Where the running catalog came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// Read from the store
    Loaded,
    /// Built from the hard-coded default set
    Defaults,
    /// Handed in by the caller, no store involved
    Provided,
}

/// Owns the catalog for the lifetime of the process
#[derive(Debug, Clone)]
pub struct Almanac {
    catalog: Catalog,
    origin: CatalogOrigin,
}

impl Almanac {
    /// Wrap an already-built catalog
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            origin: CatalogOrigin::Provided,
        }
    }

    /// Load the catalog through `store`, falling back to defaults.
    ///
    /// `NotFound` and `Unsupported` are the normal first-run outcomes. A store
    /// error while loading (unreadable or malformed file) is returned to the
    /// caller. Failing to persist the defaults is only logged.
    pub fn bootstrap(store: &dyn CatalogStore, config: &Config) -> Result<Self> {
        log::debug!("loading catalog from {}", store.describe());

        match store.load()? {
            LoadOutcome::Loaded(catalog) => {
                log::info!("loaded {} bodies from {}", catalog.len(), store.describe());
                Ok(Self {
                    catalog,
                    origin: CatalogOrigin::Loaded,
                })
            }
            outcome @ (LoadOutcome::NotFound | LoadOutcome::Unsupported) => {
                log::info!("Creating default planet data... ({:?})", outcome);
                let catalog = default_catalog();

                if config.persist_defaults {
                    if let Err(e) = store.save(&catalog) {
                        log::warn!("could not save default catalog: {}", e);
                    }
                }

                Ok(Self {
                    catalog,
                    origin: CatalogOrigin::Defaults,
                })
            }
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn origin(&self) -> CatalogOrigin {
        self.origin
    }

    pub fn interpreter(&self) -> QueryInterpreter<'_> {
        QueryInterpreter::new(&self.catalog)
    }

    pub fn interpret(&self, query: &str) -> Interpretation<'_> {
        self.interpreter().interpret(query)
    }

    pub fn answer(&self, query: &str) -> String {
        self.interpreter().answer(query)
    }
}
