//! Application context
//!
//! All shared state lives in one explicit context object: the loaded
//! dataset store and the geographic registry, built once at startup and
//! passed to every view computation. The context is read-only after
//! construction, so concurrent view computations can share it freely.

use crate::config::DashboardConfig;
use crate::dataset::DatasetStore;
use crate::dataset::loader::load_all;
use crate::geo::GeoRegistry;

/// Immutable application state shared by all view computations
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Configuration the context was built with
    pub config: DashboardConfig,
    /// Loaded dataset tables
    pub store: DatasetStore,
    /// State coordinate registry
    pub geo: GeoRegistry,
}

impl AppContext {
    /// Load all datasets and build the context
    ///
    /// Missing or corrupt dataset files become empty tables; loading
    /// never fails.
    #[must_use]
    pub fn load(config: DashboardConfig) -> Self {
        let store = load_all(&config);
        Self {
            config,
            store,
            geo: GeoRegistry::new(),
        }
    }

    /// Build a context from an already-populated store
    #[must_use]
    pub fn new(config: DashboardConfig, store: DatasetStore) -> Self {
        Self {
            config,
            store,
            geo: GeoRegistry::new(),
        }
    }
}
