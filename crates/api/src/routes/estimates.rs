//! The lighting estimation endpoint.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::{routing::post, Json, Router};
use serde::Deserialize;

use luxcalc_core::pipeline::CalculationRequest;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /api/v1/estimates`.
#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    pub category: String,
    /// Floor area in m² (area categories).
    pub area_m2: Option<f64>,
    /// Run length in m (linear categories: street, escape route).
    pub length_m: Option<f64>,
    /// Ceiling height in m.
    pub ceiling_h: f64,
    /// Luminous flux of the intended fixture, in lumens; defaults to the
    /// catalog's typical fixture for the category.
    pub fixture_lm: Option<f64>,
    /// Optional budget for the whole installation.
    pub budget: Option<f64>,
}

/// POST /estimates -- run the calculation pipeline for one room.
///
/// Validation errors map to 400 responses; a failing regressor never
/// fails the request (the pipeline degrades to the physics baseline and
/// sets `degraded` in the payload).
async fn estimate(
    State(state): State<AppState>,
    Json(body): Json<EstimateRequest>,
) -> AppResult<impl IntoResponse> {
    let request = CalculationRequest {
        category: body.category,
        area_m2: body.area_m2,
        length_m: body.length_m,
        ceiling_h: body.ceiling_h,
        fixture_lm: body.fixture_lm,
        budget: body.budget,
    };

    let calculation = state.pipeline.calculate(&request)?;

    Ok(Json(DataResponse { data: calculation }))
}

/// Estimation routes mounted at `/estimates`.
///
/// ```text
/// POST /    -> estimate
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(estimate))
}
