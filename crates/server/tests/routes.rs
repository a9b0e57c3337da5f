//! Router tests driven through `tower::ServiceExt::oneshot`, no socket.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use configs::{AppConfig, DecodeMode};
use serde_json::{json, Value};
use server::routes::{build_router, AppState};
use server::startup::build_app;
use service::registry::MemoryRegistry;
use tower::ServiceExt; // for oneshot
use tower_http::cors::CorsLayer;

fn app_with(registry: Arc<MemoryRegistry>, mode: DecodeMode) -> Router {
    build_router(AppState::new(registry, mode), CorsLayer::very_permissive())
}

fn seeded_app() -> Router {
    build_app(&AppConfig::default()).1
}

async fn send(app: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, Option<String>, String) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .expect("request");
    let res = app.clone().oneshot(req).await.expect("response");
    let status = res.status();
    let ct = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.expect("body");
    (status, ct, String::from_utf8(bytes.to_vec()).expect("utf8"))
}

#[tokio::test]
async fn list_returns_three_seeded_records() {
    let app = seeded_app();
    let (status, ct, body) = send(&app, "GET", "/services", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ct.as_deref(), Some("application/json"));

    let v: Value = serde_json::from_str(&body).unwrap();
    let arr = v.as_array().unwrap();
    assert_eq!(arr.len(), 3);
    assert_eq!(
        arr[2],
        json!({"servicename": "lan2lan", "id": "customer3", "servicedetails": {"vlan": "100", "remoteip": "1.1.1.1"}})
    );
    assert_eq!(arr[0], json!({"servicename": "lan2lan", "id": "customer1"}));
}

#[tokio::test]
async fn get_hit_and_miss() {
    let app = seeded_app();
    let (status, _, body) = send(&app, "GET", "/services/service/customer2", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap()["id"], "customer2");

    let (status, ct, body) = send(&app, "GET", "/services/service/nobody", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(ct.as_deref(), Some("application/json"));
    assert!(body.is_empty());
}

#[tokio::test]
async fn delete_unknown_is_plain_text_404() {
    let app = seeded_app();
    let (status, ct, body) = send(&app, "DELETE", "/services/service/unknown", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(ct.unwrap_or_default().starts_with("text/plain"));
    assert_eq!(body, "unknown Not found");
}

#[tokio::test]
async fn delete_returns_removed_record_and_shrinks_list() {
    let registry = MemoryRegistry::seeded();
    let app = app_with(registry.clone(), DecodeMode::Lenient);

    let (status, _, body) = send(&app, "DELETE", "/services/service/customer3", "").await;
    assert_eq!(status, StatusCode::OK);
    let v: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["servicedetails"]["vlan"], "100");
    assert_eq!(registry.len().await, 2);

    let (status, _, _) = send(&app, "DELETE", "/services/service/customer3", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_empty_body_yields_bare_id() {
    let app = seeded_app();
    let (status, ct, body) = send(&app, "POST", "/services/service/customer1", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ct.as_deref(), Some("application/json"));
    assert_eq!(body, r#"{"id":"customer1"}"#);

    // the seeded customer1 is still the one returned
    let (_, _, body) = send(&app, "GET", "/services/service/customer1", "").await;
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap()["servicename"], "lan2lan");
    let (_, _, body) = send(&app, "GET", "/services", "").await;
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap().as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn post_then_get_round_trip() {
    let app = seeded_app();
    let payload = r#"{"servicename":"lan2lan","servicedetails":{"vlan":"200","remoteip":"2.2.2.2"}}"#;
    let (status, _, created) = send(&app, "POST", "/services/service/x", payload).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, got) = send(&app, "GET", "/services/service/x", "").await;
    assert_eq!(status, StatusCode::OK);
    let expected = json!({"servicename": "lan2lan", "id": "x", "servicedetails": {"vlan": "200", "remoteip": "2.2.2.2"}});
    assert_eq!(serde_json::from_str::<Value>(&created).unwrap(), expected);
    assert_eq!(serde_json::from_str::<Value>(&got).unwrap(), expected);
}

#[tokio::test]
async fn malformed_body_lenient_accepts() {
    let app = app_with(MemoryRegistry::empty(), DecodeMode::Lenient);
    let (status, _, body) = send(&app, "POST", "/services/service/y", "{oops").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"id":"y"}"#);
}

#[tokio::test]
async fn malformed_body_strict_rejects() {
    let registry = MemoryRegistry::empty();
    let app = app_with(registry.clone(), DecodeMode::Strict);
    let (status, _, body) = send(&app, "POST", "/services/service/y", "{oops").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(serde_json::from_str::<Value>(&body).unwrap()["error"].is_string());
    assert_eq!(registry.len().await, 0);

    let (status, _, _) = send(&app, "POST", "/services/service/y", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(registry.len().await, 1);
}

#[tokio::test]
async fn unsupported_method_is_rejected() {
    let app = seeded_app();
    let (status, _, _) = send(&app, "PUT", "/services/service/customer1", "").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    let (status, _, _) = send(&app, "POST", "/services", "").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn health_and_metrics() {
    let app = seeded_app();
    let (status, _, body) = send(&app, "GET", "/health", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({"status": "ok"}));

    send(&app, "POST", "/services/service/m", "").await;
    let (status, _, body) = send(&app, "GET", "/metrics", "").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("service_registry_services_created_total"));
}

#[tokio::test]
async fn body_over_default_limit_is_still_accepted() {
    let registry = MemoryRegistry::empty();
    let app = app_with(registry.clone(), DecodeMode::Lenient);
    let padding = "a".repeat(3 * 1024 * 1024);
    let payload = format!(r#"{{"servicename":"bulk","padding":"{padding}"}}"#);
    let (status, _, body) = send(&app, "POST", "/services/service/big", &payload).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"servicename":"bulk","id":"big"}"#);
    assert_eq!(registry.len().await, 1);
}

#[tokio::test]
async fn array_body_is_not_read_by_position() {
    let app = app_with(MemoryRegistry::empty(), DecodeMode::Lenient);
    let (status, _, body) = send(&app, "POST", "/services/service/y", r#"["lan2lan"]"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"id":"y"}"#);

    let registry = MemoryRegistry::empty();
    let app = app_with(registry.clone(), DecodeMode::Strict);
    let (status, _, _) = send(&app, "POST", "/services/service/y", r#"["lan2lan"]"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(registry.len().await, 0);
}

#[tokio::test]
async fn repeated_key_keeps_last_value() {
    let app = app_with(MemoryRegistry::empty(), DecodeMode::Strict);
    let (status, _, body) =
        send(&app, "POST", "/services/service/y", r#"{"servicename":"a","servicename":"b"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"servicename":"b","id":"y"}"#);
}
