#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use labtrack_api::auth::jwt::{generate_access_token, JwtConfig};
use labtrack_api::config::ServerConfig;
use labtrack_api::context::{HasRequestContext, RequestContext};
use labtrack_api::router::build_app_router;
use labtrack_api::state::AppState;
use labtrack_core::audit::MemoryAuditSink;
use labtrack_core::types::DbId;
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &str = "integration-test-secret-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin and a 30-second request
/// timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Application state backed by an in-memory audit sink the test can inspect.
pub fn test_state() -> (AppState, Arc<MemoryAuditSink>) {
    let sink = Arc::new(MemoryAuditSink::new());
    let state = AppState::new(test_config(), sink.clone());
    (state, sink)
}

/// Build the full application router with all middleware layers.
pub fn build_test_app() -> (Router, Arc<MemoryAuditSink>) {
    let (state, sink) = test_state();
    let app = build_app_router(state).expect("test config must build a router");
    (app, sink)
}

/// A signed access token for the given user id and role name.
pub fn token_for(user_id: DbId, role: &str) -> String {
    generate_access_token(user_id, role, &test_config().jwt).expect("token generation")
}

/// `Authorization` header value carrying a fresh token.
pub fn bearer_for(user_id: DbId, role: &str) -> String {
    format!("Bearer {}", token_for(user_id, role))
}

/// Replace the controller's request context with a fresh one whose
/// `Authorization` header is exactly `value`.
pub fn set_authorization_header<C: HasRequestContext>(controller: &mut C, value: &str) {
    let mut context = RequestContext::default();
    context.headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(value).expect("valid header value"),
    );
    *controller.request_context_mut() = context;
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

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, body.to_string(), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    authorization: &str,
) -> Response {
    post_raw(app, uri, body.to_string(), Some(authorization)).await
}

pub async fn post_raw(
    app: Router,
    uri: &str,
    body: String,
    authorization: Option<&str>,
) -> Response {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(value) = authorization {
        builder = builder.header(AUTHORIZATION, value);
    }
    app.oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
