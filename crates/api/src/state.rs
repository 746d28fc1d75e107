use std::sync::Arc;

use taskboard_db::Gateway;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Persistence gateway (Postgres or in-memory).
    pub gateway: Arc<dyn Gateway>,
    /// Server configuration. Not read by any handler yet; held so handlers
    /// can reach it without changing the state type.
    pub config: Arc<ServerConfig>,
}
