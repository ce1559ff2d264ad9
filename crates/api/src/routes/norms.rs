//! Read-only view of the regulatory reference table.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::{routing::get, Json, Router};

use luxcalc_core::norms::ReferenceEntry;

use crate::response::DataResponse;
use crate::state::AppState;

/// GET /norms -- list all reference entries, sorted by category.
async fn list_norms(State(state): State<AppState>) -> impl IntoResponse {
    let entries: Vec<ReferenceEntry> = state
        .pipeline
        .norms()
        .categories()
        .into_iter()
        .cloned()
        .collect();

    Json(DataResponse { data: entries })
}

/// Norm table routes mounted at `/norms`.
///
/// ```text
/// GET /    -> list_norms
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_norms))
}
