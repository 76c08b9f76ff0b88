//! Handlers for the `/auth` resource (register, login, logout).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use sitedesk_core::error::CoreError;
use sitedesk_core::validation::validate_email;
use sitedesk_db::models::admin::{AdminInfo, CreateAdmin};
use sitedesk_db::repositories::AdminRepo;

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response for a successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub admin: AdminInfo,
}

/// Response for a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub admin: AdminInfo,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create a new admin account. Emails are stored lowercased and must be
/// unique; duplicates are reported as a validation failure, matching the
/// message the client displays inline on the signup form.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    let email = input.email.trim().to_lowercase();
    validate_email(&email).map_err(AppError::validation)?;
    validate_password_strength(&input.password).map_err(AppError::validation)?;

    if AdminRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::validation("Email already registered"));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let admin = AdminRepo::create(
        &state.pool,
        &CreateAdmin {
            name: input.name.trim().to_string(),
            email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(admin_id = admin.id, "Admin registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Admin registered successfully",
            admin: AdminInfo::from(&admin),
        }),
    ))
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Returns a bearer token. Unknown
/// emails and wrong passwords produce the same generic 401.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let email = input.email.trim().to_lowercase();

    let admin = AdminRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    let password_valid = verify_password(&input.password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let token = generate_token(admin.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(LoginResponse {
        token,
        admin: AdminInfo::from(&admin),
    }))
}

/// POST /api/v1/auth/logout
///
/// Tokens are stateless, so there is nothing to revoke server-side; the
/// endpoint exists so the client has a uniform auth surface.
pub async fn logout(_admin: AuthAdmin) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Logout successful" }))
}
