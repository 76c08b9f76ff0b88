//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the full router (same middleware stack as production) via
//! `tower::ServiceExt::oneshot`, without a TCP listener.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use sitedesk_api::auth::jwt::{generate_token, JwtConfig};
use sitedesk_api::auth::password::hash_password;
use sitedesk_api::config::ServerConfig;
use sitedesk_api::router::build_app_router;
use sitedesk_api::state::AppState;
use sitedesk_core::types::DbId;
use sitedesk_db::models::admin::CreateAdmin;
use sitedesk_db::repositories::AdminRepo;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough-for-hmac".to_string(),
            token_expiry_hours: 24,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Create an admin directly in the database and return its id.
pub async fn create_admin(pool: &PgPool, name: &str, email: &str) -> DbId {
    let password_hash = hash_password("integration-password").expect("hashing should succeed");
    let admin = AdminRepo::create(
        pool,
        &CreateAdmin {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
        },
    )
    .await
    .expect("admin creation should succeed");
    admin.id
}

/// Generate a bearer token for the given admin, signed with the same secret
/// the test router validates against.
pub fn auth_token(admin_id: DbId) -> String {
    generate_token(admin_id, &test_config().jwt).expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone()
        .oneshot(request)
        .await
        .expect("request should not fail at the transport level")
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: &Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: &Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn patch_json_auth(
    app: &Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Create an admin + project pair and return `(admin_id, token, project_id)`.
pub async fn setup_project(pool: &PgPool, email: &str) -> (DbId, String, DbId) {
    let admin_id = create_admin(pool, "Test Admin", email).await;
    let token = auth_token(admin_id);

    let app = build_test_app(pool.clone());
    let response = post_json_auth(
        &app,
        "/api/v1/projects",
        &token,
        serde_json::json!({
            "clientName": "Acme Estates",
            "projectName": "Lakeside Villa",
            "clientEmail": "client@acme.com",
            "clientPhone": "9876543210",
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    let json = body_json(response).await;
    let project_id = json["project"]["id"].as_i64().expect("project id");

    (admin_id, token, project_id)
}
