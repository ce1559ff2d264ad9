use std::sync::Arc;

use luxcalc_core::pipeline::Pipeline;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The assembled calculation pipeline (norm table, regressor, catalog).
    pub pipeline: Arc<Pipeline>,
}
