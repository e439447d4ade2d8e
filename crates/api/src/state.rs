use std::sync::Arc;

use livros_db::store::LivroStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Record store for livros (PostgreSQL or in-memory).
    pub store: Arc<dyn LivroStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn LivroStore>, config: Arc<ServerConfig>) -> Self {
        Self { store, config }
    }
}
