use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use makedeveloper_api::auth::{generate_jwt, Claims};
use makedeveloper_api::config::AppConfig;
use makedeveloper_api::database::memory::InMemoryProjectRepository;
use makedeveloper_api::router::build_router;
use makedeveloper_api::state::AppState;

pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `AppConfig` with a known signing secret.
pub fn test_config() -> AppConfig {
    AppConfig {
        jwt_secret: TEST_JWT_SECRET.to_string(),
        database_url: "postgres://localhost/makedeveloper_test".to_string(),
        port: 0,
        max_connections: 1,
    }
}

/// Build the application router backed by the in-memory repository.
///
/// Returns the repository handle alongside the router so tests can assert on
/// store side effects directly.
pub fn build_test_app() -> (Router, Arc<InMemoryProjectRepository>) {
    let repository = Arc::new(InMemoryProjectRepository::new());
    let state = AppState {
        repository: repository.clone(),
        config: Arc::new(test_config()),
    };

    (build_router(state), repository)
}

/// Mint a valid Bearer token for the given user id.
pub fn bearer_token(user_id: Uuid) -> String {
    generate_jwt(&Claims::new(user_id), TEST_JWT_SECRET).expect("token generation should succeed")
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

/// Collect a response body as plain text.
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).expect("response body should be UTF-8")
}
