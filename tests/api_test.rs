use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use vehicle_diagnostics::registry::Registry;
use vehicle_diagnostics::rest;

fn app() -> Router {
    rest::create_router(Arc::new(Registry::new()), "*")
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_root_reports_name_and_version() {
    let (status, body) = get_json(app(), "/api").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Vehicle Diagnostics API");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_vehicles_lists_full_catalog() {
    let (status, body) = get_json(app(), "/api/vehicles").await;
    assert_eq!(status, StatusCode::OK);

    let vehicles = body.as_array().unwrap();
    assert_eq!(vehicles.len(), 4);

    let model_s = vehicles
        .iter()
        .find(|v| v["id"] == "tesla-model-s-001")
        .unwrap();
    assert_eq!(model_s["name"], "Model S Plaid");
    assert_eq!(model_s["year"], 2024);
}

#[tokio::test]
async fn test_vehicle_by_id() {
    let (status, body) = get_json(app(), "/api/vehicles/tesla-model-x-001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "tesla-model-x-001");
    assert_eq!(body["model"], "Model X");
    assert_eq!(body["vin"], "5YJXCBE20MF345678");
}

#[tokio::test]
async fn test_unknown_vehicle_is_404() {
    for uri in [
        "/api/vehicles/does-not-exist",
        "/api/diagnostics/does-not-exist",
        "/api/status/does-not-exist",
    ] {
        let (status, body) = get_json(app(), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "expected 404 for {}", uri);
        assert!(body["detail"]
            .as_str()
            .unwrap()
            .contains("Vehicle not found"));
    }
}

#[tokio::test]
async fn test_diagnostics_returns_full_snapshot() {
    let (status, body) = get_json(app(), "/api/diagnostics/tesla-model-3-001").await;
    assert_eq!(status, StatusCode::OK);

    for key in [
        "vehicle_id",
        "timestamp",
        "battery",
        "motor",
        "tires",
        "gps",
        "speed",
        "range",
    ] {
        assert!(body.get(key).is_some(), "missing key {}", key);
    }
    assert_eq!(body["vehicle_id"], "tesla-model-3-001");

    // Derived-range invariant is visible on the wire
    let level = body["battery"]["level"].as_f64().unwrap();
    let range = body["range"].as_f64().unwrap();
    let expected = (level * 3.5 * 10.0).round() / 10.0;
    assert!((range - expected).abs() < 1e-9);

    let satellites = body["gps"]["satellites"].as_u64().unwrap();
    assert!((8..=15).contains(&satellites));
}

#[tokio::test]
async fn test_status_is_internally_consistent() {
    // Verdicts vary across calls, but each response must agree with its
    // own per-system ok count.
    for _ in 0..20 {
        let (status, body) = get_json(app(), "/api/status/tesla-model-y-001").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["vehicle_id"], "tesla-model-y-001");

        let ok_count = ["battery", "motor", "tires", "gps"]
            .iter()
            .filter(|system| body["systems"][**system] == "ok")
            .count();
        let expected = match ok_count {
            4 => "excellent",
            3 => "good",
            _ => "warning",
        };
        assert_eq!(body["overall_status"], expected);
    }
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/vehicles")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_allow_list_echoes_configured_origin() {
    let app = rest::create_router(Arc::new(Registry::new()), "http://localhost:3000");
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/vehicles")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:3000"
    );
}
