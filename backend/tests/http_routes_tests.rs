#![cfg(feature = "http-server")]

mod support;

use axum::http::StatusCode;
use serde_json::json;

use support::http::{app, get, post_json};

#[tokio::test]
async fn test_health() {
    let (status, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_convert_explicit_targets() {
    let (status, body) = post_json(
        app(),
        "/api/convert",
        json!({"value": 205, "from_unit": "mm", "to_units": ["m", "cm", "in", "ft"]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["original_value"], 205.0);
    assert_eq!(body["original_unit"], "mm");
    let conversions = body["conversions"].as_object().unwrap();
    assert_eq!(conversions.len(), 4);
    assert!((conversions["in"].as_f64().unwrap() - 8.070866).abs() < 1e-5);
}

#[tokio::test]
async fn test_convert_default_targets() {
    let (status, body) =
        post_json(app(), "/api/convert", json!({"value": 0, "from_unit": "celsius"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["original_unit"], "degC");
    assert_eq!(body["conversions"]["degF"], 32.0);
    assert!(body["conversions"].get("degC").is_none());
}

#[tokio::test]
async fn test_convert_rejections_are_bad_requests() {
    let (status, body) = post_json(
        app(),
        "/api/convert",
        json!({"value": 1, "from_unit": "m", "to_units": ["degC"]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INCOMPATIBLE_CATEGORIES");
    assert_eq!(body["message"], "Cannot convert length to temperature");

    let (status, body) = post_json(
        app(),
        "/api/convert",
        json!({"value": 1, "from_unit": "not_a_unit", "to_units": ["m"]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "UNKNOWN_UNIT");
    assert_eq!(body["details"], "not_a_unit");
}

#[tokio::test]
async fn test_convert_missing_fields() {
    let (status, _) = post_json(app(), "/api/convert", json!({"value": 1})).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_expression() {
    let (status, body) =
        post_json(app(), "/api/expression", json!({"expression": "5 meters + 3 feet"})).await;
    assert_eq!(status, StatusCode::OK);
    assert!((body["value"].as_f64().unwrap() - 5.9144).abs() < 1e-9);
    assert_eq!(body["unit"], "m");

    let (status, body) =
        post_json(app(), "/api/expression", json!({"expression": "5 meters + 3 seconds"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "EXPRESSION_ERROR");
}

#[tokio::test]
async fn test_categories() {
    let (status, body) = get(app(), "/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    let categories = body.as_array().unwrap();
    assert_eq!(categories.len(), 21);
    assert_eq!(categories[0], "length");
}

#[tokio::test]
async fn test_units_listing() {
    let (status, body) = get(app(), "/api/units").await;
    assert_eq!(status, StatusCode::OK);
    let length = body["length"].as_object().unwrap();
    assert!(length.contains_key("mm"));
    assert!(!length.contains_key("millimeter"));
    assert_eq!(body["velocity"]["km/h"]["dimensionality"], "[length] / [time]");
}

#[tokio::test]
async fn test_units_by_category() {
    let (status, body) = get(app(), "/api/units/temperature").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_object().unwrap().len(), 4);
    assert_eq!(body["degC"]["name"], "Celsius");

    let (status, body) = get(app(), "/api/units/speed").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "UNKNOWN_CATEGORY");
}

#[tokio::test]
async fn test_unit_lookup() {
    let (status, body) = get(app(), "/api/unit/foot").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["symbol"], "ft");
    assert_eq!(body["category"], "length");
    assert_eq!(body["dimensionality"], "[length]");
    assert_eq!(body["aliases"], json!(["foot"]));

    let (status, body) = get(app(), "/api/unit/km%2Fh").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["symbol"], "km/h");

    let (status, body) = get(app(), "/api/unit/blarg").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "UNKNOWN_UNIT");
}
