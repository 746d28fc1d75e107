#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use taskboard_core::validation::{NewAction, ProjectInput};
use taskboard_db::{Gateway, MemoryGateway};
use tower::ServiceExt;

use taskboard_api::config::ServerConfig;
use taskboard_api::router::build_app_router;
use taskboard_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        db_max_connections: 1,
    }
}

/// Build the full application router over the given gateway, using the
/// same middleware stack as production.
pub fn build_test_app(gateway: Arc<dyn Gateway>) -> Router {
    let config = test_config();
    let state = AppState {
        gateway,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// An empty in-memory store.
pub fn empty_store() -> Arc<dyn Gateway> {
    Arc::new(MemoryGateway::new())
}

/// A store holding two projects and two actions, both on project 1:
///
/// - Project A (completed = false), Project B (completed = true)
/// - Action A (completed = false), Action B (completed = true)
pub async fn seeded_store() -> Arc<dyn Gateway> {
    let store = MemoryGateway::new();
    for (name, description, completed) in [
        ("Project A", "Description A", false),
        ("Project B", "Description B", true),
    ] {
        store
            .insert_project(&ProjectInput {
                name: name.to_string(),
                description: description.to_string(),
                completed: Some(completed),
            })
            .await
            .unwrap();
    }
    for (description, notes, completed) in [
        ("Action A", "Notes A", false),
        ("Action B", "Notes B", true),
    ] {
        store
            .insert_action(&NewAction {
                project_id: 1,
                description: description.to_string(),
                notes: notes.to_string(),
                completed,
            })
            .await
            .unwrap();
    }
    Arc::new(store)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
