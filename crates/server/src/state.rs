use std::sync::Arc;

use bytesize_core::{CatalogService, Config, SanitizedConfig};

/// Shared application state
pub struct AppState {
    config: Config,
    service: Arc<CatalogService>,
}

impl AppState {
    pub fn new(config: Config, service: Arc<CatalogService>) -> Self {
        Self { config, service }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn service(&self) -> &CatalogService {
        self.service.as_ref()
    }
}
