//! Integration tests for the HTTP API
//!
//! Tests session lifecycle and per-frame endpoints

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use vlab::core::{create_router, create_router_with_config, LabConfig};
use vlab::types::TrajectoryStrategy;

async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(raw) => {
            builder = builder.header("content-type", "application/json");
            Body::from(raw.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

async fn new_session(app: &Router, body: &str) -> String {
    let (status, json) = send(app, "POST", "/session/new", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    json["session_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_router();
    let (status, json) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["sessions_active"], 0);
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_create_session_defaults() {
    let app = create_router();
    let (status, json) = send(&app, "POST", "/session/new", Some("{}")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["session_id"].is_string());
    assert!(json["websocket_url"].as_str().unwrap().starts_with("/ws/"));
    assert_eq!(json["variant"], "base");
    assert_eq!(json["strategy"], "vertical_drop");
}

#[tokio::test]
async fn test_unknown_variant_rejected() {
    let app = create_router();
    let (status, _) = send(&app, "POST", "/session/new", Some(r#"{"variant": "neutral"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "POST", "/session/new", Some(r#"{"strategy": "parabola"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_pour_flow() {
    let app = create_router();
    let id = new_session(&app, r#"{"variant": "acid"}"#).await;
    let frame_uri = format!("/session/{}/frame", id);

    let (status, json) = send(&app, "POST", &frame_uri, Some(r#"{"pose": {"angle": 20, "x": 60, "y": 240}}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["report"]["reason"], "R002_TILT_IDLE");
    assert!(json["plan"]["stream"].is_null());

    let (status, json) = send(&app, "POST", &frame_uri, Some(r#"{"pose": {"angle": 50, "x": 60, "y": 240}}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["report"]["hit"], true);
    assert_eq!(json["report"]["reaction"], "TRIGGERED");
    assert_eq!(json["plan"]["reaction_label"]["text"], "Reaction Complete!");

    let (status, json) = send(&app, "POST", &frame_uri, Some("{}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["report"]["reason"], "R001_NO_HAND");
    assert_eq!(json["report"]["reaction"], "TRIGGERED");

    let (status, json) = send(&app, "GET", &format!("/session/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["frame_count"], 3);
    assert_eq!(json["reaction"], "TRIGGERED");
    assert_eq!(json["triggered_at"], 1);
    assert_eq!(json["variant"], "acid");
}

#[tokio::test]
async fn test_extreme_anchor_frame_is_served() {
    let app = create_router();
    let id = new_session(&app, "{}").await;
    let frame_uri = format!("/session/{}/frame", id);

    let (status, json) = send(&app, "POST", &frame_uri, Some(r#"{"pose": {"angle": 50, "x": 0, "y": 2147483600}}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["report"]["terminus"]["y"], 2147483647);
    assert_eq!(json["report"]["hit"], false);

    let (status, _) = send(&app, "POST", &frame_uri, Some(r#"{"pose": {"angle": 50, "x": 0, "y": 99999999999}}"#)).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_base_config_applies_to_new_sessions() {
    let app = create_router_with_config(LabConfig::default().with_strategy(TrajectoryStrategy::Angled));
    let (_, json) = send(&app, "POST", "/session/new", Some("{}")).await;
    assert_eq!(json["strategy"], "angled");

    let (_, json) = send(&app, "POST", "/session/new", Some(r#"{"strategy": "vertical"}"#)).await;
    assert_eq!(json["strategy"], "vertical_drop");
}

#[tokio::test]
async fn test_missing_session_is_404() {
    let app = create_router();

    let (status, _) = send(&app, "GET", "/session/nonexistent", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "POST", "/session/nonexistent/frame", Some("{}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/session/nonexistent", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_session() {
    let app = create_router();
    let id = new_session(&app, "{}").await;
    let uri = format!("/session/{}", id);

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, json) = send(&app, "GET", "/health", None).await;
    assert_eq!(json["sessions_active"], 0);
}
