#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use storefront_db::{CatalogStore, SharedStore};
use tower::ServiceExt;

use storefront_api::config::ServerConfig;
use storefront_api::router::build_app_router;
use storefront_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        request_timeout_secs: 30,
        seed_sample_data: true,
    }
}

/// A store pre-populated with the sample catalog.
pub fn seeded_store() -> SharedStore {
    Arc::new(CatalogStore::seeded())
}

/// A store with both collections empty.
pub fn empty_store() -> SharedStore {
    Arc::new(CatalogStore::new())
}

/// Build the full application router, with the production middleware stack,
/// over the given store.
pub fn build_test_app(store: SharedStore) -> Router {
    build_test_app_with_config(store, test_config())
}

/// Same as [`build_test_app`] but with a caller-supplied configuration.
pub fn build_test_app_with_config(store: SharedStore, config: ServerConfig) -> Router {
    let state = AppState {
        store,
        config: Arc::new(config),
    };
    build_app_router(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PATCH, uri, body).await
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a JSON error envelope with the given status and code.
pub async fn assert_error(response: Response, status: StatusCode, code: &str) -> serde_json::Value {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["code"], code);
    json
}
