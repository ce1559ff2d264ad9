use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the trained regressor is loaded. False means the service
    /// is answering from the physics baseline only.
    pub model_loaded: bool,
}

/// GET /health -- returns service status and degraded-mode visibility.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let model_loaded = state.pipeline.has_regressor();

    let status = if model_loaded { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        model_loaded,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
