//! HTTP-level integration tests for registration, login, and logout.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, post_json_auth};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_returns_201_with_admin_info(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        &app,
        "/api/v1/auth/register",
        serde_json::json!({
            "name": "Asha Verma",
            "email": "asha@builders.com",
            "password": "a-strong-password",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["admin"]["name"], "Asha Verma");
    assert_eq!(json["admin"]["email"], "asha@builders.com");
    assert!(json["admin"]["id"].is_number());
    // The credential hash must never appear in a response.
    assert!(json["admin"].get("passwordHash").is_none());
    assert!(json["admin"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_duplicate_email_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "name": "First",
        "email": "a@b.com",
        "password": "password-one",
    });

    let first = post_json(&app, "/api/v1/auth/register", body.clone()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(&app, "/api/v1/auth/register", body).await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let json = body_json(second).await;
    assert_eq!(json["message"], "Email already registered");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_email_is_case_insensitive(pool: PgPool) {
    let app = common::build_test_app(pool);

    let first = post_json(
        &app,
        "/api/v1/auth/register",
        serde_json::json!({"name": "A", "email": "Same@Example.com", "password": "password-one"}),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(
        &app,
        "/api/v1/auth/register",
        serde_json::json!({"name": "B", "email": "same@example.com", "password": "password-two"}),
    )
    .await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_malformed_email_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        &app,
        "/api/v1/auth/register",
        serde_json::json!({"name": "X", "email": "not-an-email", "password": "password-one"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_short_password_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        &app,
        "/api/v1/auth/register",
        serde_json::json!({"name": "X", "email": "x@y.com", "password": "short"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success_returns_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    post_json(
        &app,
        "/api/v1/auth/register",
        serde_json::json!({"name": "Login User", "email": "login@x.com", "password": "password-one"}),
    )
    .await;

    let response = post_json(
        &app,
        "/api/v1/auth/login",
        serde_json::json!({"email": "login@x.com", "password": "password-one"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["token"].is_string(), "response must contain a token");
    assert_eq!(json["admin"]["email"], "login@x.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    post_json(
        &app,
        "/api/v1/auth/register",
        serde_json::json!({"name": "U", "email": "u@x.com", "password": "password-one"}),
    )
    .await;

    let response = post_json(
        &app,
        "/api/v1/auth/login",
        serde_json::json!({"email": "u@x.com", "password": "wrong-password"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_unknown_email_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        &app,
        "/api/v1/auth/login",
        serde_json::json!({"email": "ghost@x.com", "password": "whatever-long"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let unauthenticated = post_json(&app, "/api/v1/auth/logout", serde_json::json!({})).await;
    assert_eq!(unauthenticated.status(), StatusCode::UNAUTHORIZED);

    let admin_id = common::create_admin(&pool, "Out", "out@x.com").await;
    let token = common::auth_token(admin_id);
    let authenticated =
        post_json_auth(&app, "/api/v1/auth/logout", &token, serde_json::json!({})).await;
    assert_eq!(authenticated.status(), StatusCode::OK);
    let json = body_json(authenticated).await;
    assert_eq!(json["message"], "Logout successful");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_protected_endpoint_rejects_bad_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_auth(&app, "/api/v1/projects", "not-a-real-token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
