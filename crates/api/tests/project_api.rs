//! HTTP-level integration tests for project CRUD and ownership scoping.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json_auth, put_json_auth};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project_defaults_status_active(pool: PgPool) {
    let admin_id = common::create_admin(&pool, "Admin", "pm@x.com").await;
    let token = common::auth_token(admin_id);
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        &app,
        "/api/v1/projects",
        &token,
        serde_json::json!({
            "clientName": "Acme Estates",
            "projectName": "Lakeside Villa",
            "clientEmail": "Client@Acme.com",
            "clientPhone": "9876543210",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Project created successfully");
    assert_eq!(json["project"]["status"], "active");
    assert_eq!(json["project"]["clientEmail"], "client@acme.com");
    assert!(json["project"]["startDate"].is_string(), "start date defaults to now");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project_invalid_phone_returns_400(pool: PgPool) {
    let admin_id = common::create_admin(&pool, "Admin", "pm@x.com").await;
    let token = common::auth_token(admin_id);
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        &app,
        "/api/v1/projects",
        &token,
        serde_json::json!({
            "clientName": "C",
            "projectName": "P",
            "clientEmail": "c@x.com",
            "clientPhone": "12345",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project_invalid_email_returns_400(pool: PgPool) {
    let admin_id = common::create_admin(&pool, "Admin", "pm@x.com").await;
    let token = common::auth_token(admin_id);
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        &app,
        "/api/v1/projects",
        &token,
        serde_json::json!({
            "clientName": "C",
            "projectName": "P",
            "clientEmail": "not-an-email",
            "clientPhone": "9876543210",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_returns_only_own_projects_newest_first(pool: PgPool) {
    let admin_a = common::create_admin(&pool, "A", "a@x.com").await;
    let admin_b = common::create_admin(&pool, "B", "b@x.com").await;
    let token_a = common::auth_token(admin_a);
    let token_b = common::auth_token(admin_b);
    let app = common::build_test_app(pool);

    for name in ["First", "Second"] {
        let response = post_json_auth(
            &app,
            "/api/v1/projects",
            &token_a,
            serde_json::json!({
                "clientName": "C",
                "projectName": name,
                "clientEmail": "c@x.com",
                "clientPhone": "9876543210",
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
    post_json_auth(
        &app,
        "/api/v1/projects",
        &token_b,
        serde_json::json!({
            "clientName": "Other",
            "projectName": "Not Yours",
            "clientEmail": "o@x.com",
            "clientPhone": "1234567890",
        }),
    )
    .await;

    let response = get_auth(&app, "/api/v1/projects", &token_a).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let projects = json.as_array().expect("list response is an array");
    assert_eq!(projects.len(), 2, "admin A sees only their own projects");
    assert_eq!(projects[0]["projectName"], "Second", "newest created first");
    assert_eq!(projects[1]["projectName"], "First");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_project_of_other_admin_returns_404(pool: PgPool) {
    let (_owner, _token, project_id) = common::setup_project(&pool, "owner@x.com").await;
    let intruder = common::create_admin(&pool, "Intruder", "intruder@x.com").await;
    let intruder_token = common::auth_token(intruder);
    let app = common::build_test_app(pool);

    let response = get_auth(&app, &format!("/api/v1/projects/{project_id}"), &intruder_token).await;
    // Not-owned and nonexistent are indistinguishable.
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_project_subset_and_status(pool: PgPool) {
    let (_admin, token, project_id) = common::setup_project(&pool, "pm@x.com").await;
    let app = common::build_test_app(pool);

    let response = put_json_auth(
        &app,
        &format!("/api/v1/projects/{project_id}"),
        &token,
        serde_json::json!({ "status": "completed", "projectName": "Renamed" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["project"]["status"], "completed");
    assert_eq!(json["project"]["projectName"], "Renamed");
    // Untouched fields survive the sparse patch.
    assert_eq!(json["project"]["clientName"], "Acme Estates");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_project_invalid_status_returns_400(pool: PgPool) {
    let (_admin, token, project_id) = common::setup_project(&pool, "pm@x.com").await;
    let app = common::build_test_app(pool.clone());

    let response = put_json_auth(
        &app,
        &format!("/api/v1/projects/{project_id}"),
        &token,
        serde_json::json!({ "status": "archived" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Storage was never touched: the status is unchanged.
    let status: String = sqlx::query_scalar("SELECT status FROM projects WHERE id = $1")
        .bind(project_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(status, "active");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_project_of_other_admin_returns_404(pool: PgPool) {
    let (_owner, _token, project_id) = common::setup_project(&pool, "owner@x.com").await;
    let intruder = common::create_admin(&pool, "Intruder", "intruder@x.com").await;
    let intruder_token = common::auth_token(intruder);
    let app = common::build_test_app(pool);

    let response = put_json_auth(
        &app,
        &format!("/api/v1/projects/{project_id}"),
        &intruder_token,
        serde_json::json!({ "projectName": "Hijacked" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_project_cascades_children(pool: PgPool) {
    let (_admin, token, project_id) = common::setup_project(&pool, "pm@x.com").await;
    let app = common::build_test_app(pool.clone());

    // Seed one of each child record.
    post_json_auth(
        &app,
        &format!("/api/v1/projects/{project_id}/budget/items"),
        &token,
        serde_json::json!({ "cumulativeWork": "Foundation", "cumulativePercentage": 10, "amount": 100 }),
    )
    .await;
    post_json_auth(
        &app,
        &format!("/api/v1/projects/{project_id}/billing"),
        &token,
        serde_json::json!({ "billingAmount": 500, "recipient": "Contractor" }),
    )
    .await;
    post_json_auth(
        &app,
        &format!("/api/v1/projects/{project_id}/events"),
        &token,
        serde_json::json!({
            "type": "workOrder",
            "data": { "orderDate": "2025-05-01", "contractor": "BuildCo", "scopeOfWork": "Framing" },
        }),
    )
    .await;

    let response = delete_auth(&app, &format!("/api/v1/projects/{project_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let get_response = get_auth(&app, &format!("/api/v1/projects/{project_id}"), &token).await;
    assert_eq!(get_response.status(), StatusCode::NOT_FOUND);

    // No orphans survive the parent delete.
    for table in ["budget_items", "billing_entries", "project_events"] {
        let count: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table} WHERE project_id = $1"))
                .bind(project_id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(count, 0, "{table} rows must cascade");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_project_of_other_admin_returns_404(pool: PgPool) {
    let (_owner, owner_token, project_id) = common::setup_project(&pool, "owner@x.com").await;
    let intruder = common::create_admin(&pool, "Intruder", "intruder@x.com").await;
    let intruder_token = common::auth_token(intruder);
    let app = common::build_test_app(pool);

    let response =
        delete_auth(&app, &format!("/api/v1/projects/{project_id}"), &intruder_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Still there for the owner.
    let response = get_auth(&app, &format!("/api/v1/projects/{project_id}"), &owner_token).await;
    assert_eq!(response.status(), StatusCode::OK);
}
