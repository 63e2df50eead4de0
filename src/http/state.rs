use crate::config::Config;
use crate::session::SessionStore;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Live sessions, exclusively owned by the store
    pub store: SessionStore,

    /// Service configuration (name and version are reported by the health
    /// and banner endpoints)
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            store: SessionStore::new(),
            config,
        }
    }
}
