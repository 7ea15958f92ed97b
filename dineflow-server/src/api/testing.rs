//! Router harness for handler tests
//!
//! The pool is lazy and points at a closed local port, so handlers that
//! reject a request before touching storage run without PostgreSQL, and
//! handlers that do reach storage fail fast.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use crate::core::{AppState, Config};
use crate::db::Database;

pub fn test_config() -> Config {
    Config::from_lookup(|name| match name {
        "DB_HOST" => Some("127.0.0.1".to_string()),
        "DB_PORT" => Some("1".to_string()),
        "DB_ACQUIRE_TIMEOUT_MS" => Some("300".to_string()),
        _ => None,
    })
    .unwrap()
}

pub fn test_app() -> Router {
    let config = test_config();
    let db = Database::connect_lazy(&config).unwrap();
    super::build_app(AppState::from_database(config, db))
}

/// Send one request and decode the JSON envelope
pub async fn send(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = test_app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn get(uri: &str) -> (StatusCode, Value) {
    send(Method::GET, uri, None).await
}

/// Raw body request, for malformed JSON
pub async fn send_raw(method: Method, uri: &str, body: &'static str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_unknown_route_is_enveloped() {
    let (status, body) = get("/api/nothing-here").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "route_not_found");
    assert_eq!(body["message"], "Route /api/nothing-here not found");
}
