#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use luxcalc_api::config::ServerConfig;
use luxcalc_api::router::build_app_router;
use luxcalc_api::state::AppState;
use luxcalc_catalog::Catalog;
use luxcalc_core::error::CoreError;
use luxcalc_core::norms::NormTable;
use luxcalc_core::pipeline::Pipeline;
use luxcalc_core::regressor::{FeatureVector, Regressor};

/// Deterministic stand-in for the trained regressor.
pub struct FixedRegressor(pub f64);

impl Regressor for FixedRegressor {
    fn score(&self, _features: &FeatureVector) -> Result<f64, CoreError> {
        Ok(self.0)
    }
}

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        norms_path: None,
        model_path: "models/fixtures_model.json".to_string(),
        catalog_path: "data/fixture_catalog.csv".to_string(),
    }
}

fn app_with_pipeline(pipeline: Pipeline) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        pipeline: Arc::new(pipeline),
    };
    build_app_router(state, &config)
}

/// Build the full application router with all middleware layers, using
/// the built-in norm table, a fixed-output regressor, and the built-in
/// catalog tables.
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery) that production uses.
pub fn build_test_app(raw_estimate: f64) -> Router {
    app_with_pipeline(Pipeline::new(
        Arc::new(NormTable::builtin()),
        Some(Arc::new(FixedRegressor(raw_estimate))),
        Some(Arc::new(Catalog::builtin())),
    ))
}

/// Same as [`build_test_app`], but without a loaded regressor --
/// physics-only (degraded) mode.
pub fn build_degraded_test_app() -> Router {
    app_with_pipeline(Pipeline::new(
        Arc::new(NormTable::builtin()),
        None,
        Some(Arc::new(Catalog::builtin())),
    ))
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
