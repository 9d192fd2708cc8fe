// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;

use passrule_core::application::{
    commands::password::DEFAULT_COMPONENT,
    ports::policy::PolicyOverrideProvider,
    services::ApplicationServices,
};
use passrule_core::infrastructure::{i18n::LanguageCatalog, params::JsonParamsStore};
use passrule_core::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};

pub fn build_test_state(overrides: Arc<dyn PolicyOverrideProvider>) -> HttpState {
    let services = Arc::new(ApplicationServices::new(
        overrides,
        Arc::new(LanguageCatalog::en_gb()),
        DEFAULT_COMPONENT,
    ));
    HttpState { services }
}

/// Router with no component parameters and rate limiting disabled.
pub fn make_test_router() -> axum::Router {
    make_test_router_with(Arc::new(JsonParamsStore::empty()))
}

pub fn make_test_router_with(overrides: Arc<dyn PolicyOverrideProvider>) -> axum::Router {
    build_router(build_test_state(overrides), &RouterOptions::default())
}

pub fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body_bytes).expect("valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
