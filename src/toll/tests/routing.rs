use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::toll::router::toll_router;
use crate::toll::service::TollAssessmentService;

async fn read_json_body(response: axum::response::Response) -> Value {
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

fn assessment_request(payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/toll/assessments")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(payload).expect("serialize")))
        .expect("request")
}

#[tokio::test]
async fn post_assessment_returns_the_daily_total() {
    let router = build_router();
    let payload = json!({
        "vehicle": "car",
        "passes": ["2013-02-08 06:00", "2013-02-08 06:45", "2013-02-08 08:00"],
    });

    let response = router
        .oneshot(assessment_request(&payload))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body.get("total").and_then(Value::as_u64), Some(32));
    assert_eq!(
        body.get("windows").and_then(Value::as_array).map(Vec::len),
        Some(2)
    );
    assert_eq!(body.get("vehicle").and_then(Value::as_str), Some("car"));
}

#[tokio::test]
async fn post_assessment_reports_waivers() {
    let router = build_router();
    let payload = json!({
        "vehicle": "motorbike",
        "passes": ["2013-02-08 07:30"],
    });

    let response = router
        .oneshot(assessment_request(&payload))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body.get("total").and_then(Value::as_u64), Some(0));
    assert!(body
        .get("decision")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .contains("waived"));
}

#[tokio::test]
async fn unknown_vehicle_labels_are_charged_as_ordinary_traffic() {
    let router = build_router();
    let payload = json!({
        "vehicle": "hovercraft",
        "passes": ["2013-02-08 06:45"],
    });

    let response = router
        .oneshot(assessment_request(&payload))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body.get("total").and_then(Value::as_u64), Some(16));
}

#[tokio::test]
async fn malformed_pass_timestamps_are_rejected() {
    let router = build_router();
    let payload = json!({
        "vehicle": "car",
        "passes": ["around breakfast"],
    });

    let response = router
        .oneshot(assessment_request(&payload))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn calendar_outage_maps_to_service_unavailable() {
    let service = Arc::new(TollAssessmentService::standard(Arc::new(
        UnavailableCalendar,
    )));
    let router = toll_router(service);
    let payload = json!({
        "vehicle": "car",
        "passes": ["2013-02-08 07:30"],
    });

    let response = router
        .oneshot(assessment_request(&payload))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = read_json_body(response).await;
    assert!(body
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .contains("unavailable"));
}

#[tokio::test]
async fn tariff_endpoint_publishes_the_schedule() {
    let router = build_router();
    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/toll/tariff")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body.get("daily_cap").and_then(Value::as_u64), Some(60));
    let bands = body.get("bands").and_then(Value::as_array).expect("bands");
    assert_eq!(bands.len(), 9);
}
