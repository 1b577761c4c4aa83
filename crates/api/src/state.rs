use std::sync::Arc;

use storefront_db::SharedStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory catalog.
    pub store: SharedStore,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
