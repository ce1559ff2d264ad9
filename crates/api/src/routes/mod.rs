pub mod estimates;
pub mod health;
pub mod norms;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /estimates          POST   run a lighting calculation
/// /norms              GET    list regulatory reference entries
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/estimates", estimates::router())
        .nest("/norms", norms::router())
}
