//! Application state for the HTTP server.

use std::sync::Arc;

use crate::adapter::{ConversionEngine, EngineAdapter};
use crate::catalog::{CatalogError, UnitCatalog};
use crate::config::{ConfigError, ServerConfig};
use crate::resolver::UnitResolver;
use crate::services::{CatalogService, ConversionService};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub conversion: ConversionService,
    pub catalog: CatalogService,
    /// Attach a permissive CORS layer to the router.
    pub cors_allow_any: bool,
}

impl AppState {
    /// Create application state over a catalog and an engine.
    pub fn new(catalog: Arc<UnitCatalog>, engine: Arc<dyn ConversionEngine>) -> Self {
        let resolver = UnitResolver::new(catalog.clone());
        Self {
            conversion: ConversionService::new(resolver, engine.clone()),
            catalog: CatalogService::new(catalog, engine),
            cors_allow_any: true,
        }
    }

    /// State over the builtin catalog and engine.
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self::new(
            Arc::new(UnitCatalog::builtin()?),
            Arc::new(EngineAdapter::builtin()),
        ))
    }

    /// State for a server configuration, including its custom units.
    pub fn from_config(config: &ServerConfig) -> Result<Self, ConfigError> {
        let (catalog, registry) = config.load_units()?;
        let mut state = Self::new(Arc::new(catalog), Arc::new(EngineAdapter::new(registry)));
        state.cors_allow_any = config.cors_allow_any;
        Ok(state)
    }
}
