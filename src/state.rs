//! Application state management
//!
//! Contains shared state accessible across all handlers.

use crate::catalog::CatalogClient;
use std::sync::Arc;

/// Application state shared across all handlers
pub struct AppState {
    /// Catalog client, built once at startup and only read afterwards
    pub catalog: Arc<dyn CatalogClient>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogClient>) -> Self {
        Self { catalog }
    }
}

/// Type alias for shared state
pub type SharedState = Arc<AppState>;
