use std::sync::Arc;

use snowmock_core::registry::JobRegistry;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// In-memory job registry, owned by the serving process.
    pub registry: Arc<JobRegistry>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
