//! Shared HTTP application state

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::deal_store::DealStore;

/// State handed to every handler
///
/// The store is immutable, so handlers share it without locking.
pub struct AppState {
    pub store: Arc<DealStore>,
    pub max_page_size: usize,
}

impl AppState {
    /// Create state with the default page-size cap
    pub fn new(store: Arc<DealStore>) -> Self {
        Self::with_config(store, &ServerConfig::default())
    }

    pub fn with_config(store: Arc<DealStore>, config: &ServerConfig) -> Self {
        Self {
            store,
            max_page_size: config.max_page_size.max(1),
        }
    }

    /// Snapshot version echoed in every response
    pub fn snapshot(&self) -> String {
        self.store.snapshot().to_string()
    }
}
