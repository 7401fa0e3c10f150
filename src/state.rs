use crate::config::Config;
use crate::pages::PageRegistry;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<PageRegistry>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            registry: Arc::new(PageRegistry::with_default_pages()),
            config: Arc::new(config),
        }
    }
}
