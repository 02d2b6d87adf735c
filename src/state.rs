use crate::config::Config;
use crate::store::RouteStore;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared application state
///
/// Every store operation runs while holding the single store lock.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<RouteStore>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: RouteStore, config: Config) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            config: Arc::new(config),
        }
    }
}
