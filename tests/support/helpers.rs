// tests/support/helpers.rs
use axum::Router;
use axum::body::{self, Body};
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use servertime::application::{ports::time::Clock, services::ApplicationServices};
use servertime::config::AppConfig;
use servertime::presentation::http::{routes::build_router, state::HttpState};
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub fn build_test_state(clock: Arc<dyn Clock>) -> HttpState {
    HttpState {
        services: Arc::new(ApplicationServices::new(clock)),
    }
}

/// Router wired to `clock` with the default (unlimited) configuration.
pub fn make_test_router(clock: Arc<dyn Clock>) -> Router {
    make_test_router_with_config(clock, &AppConfig::default())
}

pub fn make_test_router_with_config(clock: Arc<dyn Clock>, config: &AppConfig) -> Router {
    build_router(build_test_state(clock), config)
}

/// `GET uri` as sent through a proxy for `client_ip`. `oneshot` requests
/// carry no peer address, so the limiter keys on this header.
pub fn get_forwarded(uri: &str, client_ip: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("x-forwarded-for", client_ip)
        .body(Body::empty())
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send `req` and collect status, headers and the raw body.
pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.unwrap();
    (status, parts.headers, bytes.to_vec())
}

/// Send `req` and decode the body as JSON, panicking with the raw body when
/// it is not JSON.
pub async fn send_json(app: Router, req: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let (status, headers, bytes) = send(app, req).await;
    let json = serde_json::from_slice(&bytes).unwrap_or_else(|err| {
        panic!(
            "expected JSON body ({err}), got {status}: {}",
            String::from_utf8_lossy(&bytes)
        )
    });
    (status, headers, json)
}

pub fn content_type(headers: &HeaderMap) -> &str {
    headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
