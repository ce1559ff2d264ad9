//! Integration tests for the estimation endpoint.
//!
//! The office scenario used throughout: 500 lux × 40 m² × K 1.2 =
//! 24000 lm, at 4000 lm per fixture -> baseline 6, cap ceil(1.5 × 6) = 9.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use serde_json::json;

fn office_body() -> serde_json::Value {
    json!({
        "category": "office",
        "area_m2": 40.0,
        "ceiling_h": 3.0,
        "fixture_lm": 4000.0
    })
}

// ---------------------------------------------------------------------------
// Happy path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn in_envelope_estimate_passes_through() {
    let app = common::build_test_app(7.0);
    let response = post_json(app, "/api/v1/estimates", office_body()).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];

    assert_eq!(data["baseline"]["fixture_count"], 6);
    assert_eq!(data["baseline"]["required_flux_lm"], 24000.0);
    assert_eq!(data["recommendation"]["fixture_count"], 7);
    assert_eq!(data["recommendation"]["bounds_applied"], "none");
    assert_eq!(data["recommendation"]["within_budget"], true);
    assert_eq!(data["degraded"], false);
}

#[tokio::test]
async fn low_estimate_is_clamped_to_baseline() {
    let app = common::build_test_app(5.2);
    let response = post_json(app, "/api/v1/estimates", office_body()).await;

    let json = body_json(response).await;
    let data = &json["data"];

    assert_eq!(data["recommendation"]["fixture_count"], 6);
    assert_eq!(data["recommendation"]["bounds_applied"], "clamped_low");
}

#[tokio::test]
async fn runaway_estimate_is_clamped_to_cap() {
    let app = common::build_test_app(13.0);
    let response = post_json(app, "/api/v1/estimates", office_body()).await;

    let json = body_json(response).await;
    let data = &json["data"];

    assert_eq!(data["recommendation"]["fixture_count"], 9);
    assert_eq!(data["recommendation"]["bounds_applied"], "clamped_high");
}

// ---------------------------------------------------------------------------
// Degraded mode
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_model_degrades_to_baseline() {
    let app = common::build_degraded_test_app();
    let response = post_json(app, "/api/v1/estimates", office_body()).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];

    assert_eq!(data["degraded"], true);
    assert_eq!(data["recommendation"]["fixture_count"], 6);
    assert_eq!(data["recommendation"]["bounds_applied"], "none");
}

// ---------------------------------------------------------------------------
// Catalog defaults
// ---------------------------------------------------------------------------

#[tokio::test]
async fn omitted_fixture_flux_uses_catalog_default() {
    let app = common::build_test_app(7.0);
    let body = json!({
        "category": "office",
        "area_m2": 40.0,
        "ceiling_h": 3.0
    });
    let response = post_json(app, "/api/v1/estimates", body).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];

    // Catalog default for offices: panel, 3500 lm typical.
    assert_eq!(data["fixture"]["fixture_type"], "panel");
    assert_eq!(data["fixture"]["fixture_lm"], 3500.0);
    // 24000 / 3500 = 6.857... -> baseline 7.
    assert_eq!(data["baseline"]["fixture_count"], 7);
}

// ---------------------------------------------------------------------------
// Budget handling
// ---------------------------------------------------------------------------

#[tokio::test]
async fn over_budget_falls_back_to_baseline() {
    // Default brand (Luxerna) prices 4000 lm at 4000 × 0.5 × 1.15 = 2300.
    // 7 × 2300 = 16100 over a 15000 budget; baseline 6 × 2300 = 13800 fits.
    let app = common::build_test_app(7.0);
    let mut body = office_body();
    body["budget"] = json!(15000.0);
    let response = post_json(app, "/api/v1/estimates", body).await;

    let json = body_json(response).await;
    let data = &json["data"];

    assert_eq!(data["recommendation"]["fixture_count"], 6);
    assert_eq!(data["recommendation"]["bounds_applied"], "budget_fallback");
    assert_eq!(data["recommendation"]["within_budget"], true);
    assert_eq!(data["estimated_cost"], 13800.0);
}

#[tokio::test]
async fn tight_budget_switches_to_economy_brand() {
    // Even the baseline at Luxerna prices (13800) blows a 13000 budget;
    // Omnilux prices the same panel at 1700, so all 7 fixtures fit.
    let app = common::build_test_app(7.0);
    let mut body = office_body();
    body["budget"] = json!(13000.0);
    let response = post_json(app, "/api/v1/estimates", body).await;

    let json = body_json(response).await;
    let data = &json["data"];

    assert_eq!(data["fixture"]["brand"], "Omnilux");
    assert_eq!(data["recommendation"]["fixture_count"], 7);
    assert_eq!(data["recommendation"]["within_budget"], true);
    assert_eq!(data["estimated_cost"], 11900.0);
}

#[tokio::test]
async fn infeasible_budget_is_flagged_but_still_answers() {
    let app = common::build_test_app(7.0);
    let mut body = office_body();
    body["budget"] = json!(100.0);
    let response = post_json(app, "/api/v1/estimates", body).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];

    // The regulatory minimum is never sacrificed for cost.
    assert_eq!(data["recommendation"]["fixture_count"], 6);
    assert_eq!(data["recommendation"]["within_budget"], false);
}

// ---------------------------------------------------------------------------
// Linear categories
// ---------------------------------------------------------------------------

#[tokio::test]
async fn street_estimate_uses_run_length() {
    let app = common::build_test_app(1.0);
    let body = json!({
        "category": "street",
        "length_m": 20.0,
        "ceiling_h": 6.0,
        "fixture_lm": 6000.0
    });
    let response = post_json(app, "/api/v1/estimates", body).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];

    // 20 m × 3.0 m standard width.
    assert_eq!(data["effective_area_m2"], 60.0);
    assert_eq!(data["baseline"]["fixture_count"], 1);
}

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_category_is_rejected() {
    let app = common::build_test_app(7.0);
    let body = json!({
        "category": "nonexistent_category",
        "area_m2": 40.0,
        "ceiling_h": 3.0,
        "fixture_lm": 4000.0
    });
    let response = post_json(app, "/api/v1/estimates", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNKNOWN_CATEGORY");
}

#[tokio::test]
async fn non_positive_area_is_rejected() {
    let app = common::build_test_app(7.0);
    let mut body = office_body();
    body["area_m2"] = json!(-5.0);
    let response = post_json(app, "/api/v1/estimates", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_DIMENSION");
}

#[tokio::test]
async fn non_positive_ceiling_is_rejected() {
    let app = common::build_test_app(7.0);
    let mut body = office_body();
    body["ceiling_h"] = json!(0.0);
    let response = post_json(app, "/api/v1/estimates", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_DIMENSION");
}

#[tokio::test]
async fn negative_budget_is_rejected() {
    let app = common::build_test_app(7.0);
    let mut body = office_body();
    body["budget"] = json!(-100.0);
    let response = post_json(app, "/api/v1/estimates", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}
