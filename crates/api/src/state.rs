use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: aula_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Event bus the handlers publish record-created events to.
    pub event_bus: Arc<aula_events::EventBus>,
}
