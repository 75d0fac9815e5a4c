use std::sync::Arc;

use config::FundApiConfig;

use crate::backend::{ClawpyBackend, ContractBackend};
use crate::codec::AddressRenderer;
use crate::routes::RouteRegistry;

#[derive(Clone)]
pub struct AppState {
    pub config: FundApiConfig,
    pub backend: Arc<dyn ContractBackend>,
    pub renderer: AddressRenderer,
    pub route_registry: RouteRegistry,
}

impl AppState {
    pub fn new(config: FundApiConfig) -> Self {
        let backend = Arc::new(ClawpyBackend::new(config.chain.clone()));
        Self::with_backend(config, backend)
    }

    /// Build state around an arbitrary backend. Tests use this to swap in
    /// a mock that never spawns a subprocess.
    pub fn with_backend(config: FundApiConfig, backend: Arc<dyn ContractBackend>) -> Self {
        let renderer = AddressRenderer::new(config.chain.address_format);
        Self {
            config,
            backend,
            renderer,
            route_registry: RouteRegistry::new(),
        }
    }
}
