//! Integration tests for the norm table listing.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

#[tokio::test]
async fn lists_reference_entries_sorted_by_category() {
    let app = common::build_test_app(7.0);
    let response = get(app, "/api/v1/norms").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let entries = json["data"].as_array().expect("data must be an array");
    assert!(!entries.is_empty());

    let categories: Vec<&str> = entries
        .iter()
        .map(|entry| entry["category"].as_str().unwrap())
        .collect();
    let mut sorted = categories.clone();
    sorted.sort();
    assert_eq!(categories, sorted);
}

#[tokio::test]
async fn office_entry_carries_reference_values() {
    let app = common::build_test_app(7.0);
    let response = get(app, "/api/v1/norms").await;

    let json = body_json(response).await;
    let office = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|entry| entry["category"] == "office")
        .expect("office entry must exist");

    assert_eq!(office["required_lux"], 500.0);
    assert_eq!(office["maintenance_factor"], 1.2);
    assert!(office["norm_ref"].as_str().unwrap().contains("EN 12464-1"));
}

#[tokio::test]
async fn street_entry_is_linear() {
    let app = common::build_test_app(7.0);
    let response = get(app, "/api/v1/norms").await;

    let json = body_json(response).await;
    let street = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|entry| entry["category"] == "street")
        .expect("street entry must exist");

    assert_eq!(street["geometry"]["kind"], "linear");
    assert_eq!(street["geometry"]["standard_width_m"], 3.0);
}
