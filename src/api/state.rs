use std::sync::Arc;

use crate::services::{CatalogClient, DiscoveryLimits, DiscoveryLoop};

/// Shared application state
///
/// Holds no per-request data: every search owns its own session and random
/// source, so concurrent requests never contend on anything here.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogClient>,
    pub discovery: Arc<DiscoveryLoop>,
}

impl AppState {
    /// Creates application state around a catalog
    pub fn new(catalog: Arc<dyn CatalogClient>, limits: DiscoveryLimits) -> Self {
        Self {
            discovery: Arc::new(DiscoveryLoop::new(catalog.clone(), limits)),
            catalog,
        }
    }
}
