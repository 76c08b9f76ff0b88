//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use sitedesk_core::status::ProjectStatus;
use sitedesk_core::types::{DbId, Timestamp};
use sitedesk_core::validation::{validate_email, validate_phone};
use sitedesk_db::models::project::{CreateProject, Project, UpdateProject};
use sitedesk_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// Request body for `PUT /projects/{id}`. Any subset of fields; the status
/// arrives as a raw string and is parsed before storage is touched.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub client_name: Option<String>,
    pub project_name: Option<String>,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub start_date: Option<Timestamp>,
    pub status: Option<String>,
}

/// Mutation response: a message plus the affected project.
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub message: &'static str,
    pub project: Project,
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<ProjectResponse>)> {
    let mut input = input;
    input.client_email = input.client_email.trim().to_lowercase();
    validate_email(&input.client_email).map_err(AppError::validation)?;
    validate_phone(&input.client_phone).map_err(AppError::validation)?;

    let project = ProjectRepo::create(&state.pool, admin.admin_id, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ProjectResponse {
            message: "Project created successfully",
            project,
        }),
    ))
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    admin: AuthAdmin,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list_by_admin(&state.pool, admin.admin_id).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, admin.admin_id, project_id)
        .await?
        .ok_or_else(|| AppError::not_found("Project not found or access denied"))?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(project_id): Path<DbId>,
    Json(input): Json<UpdateProjectRequest>,
) -> AppResult<Json<ProjectResponse>> {
    let status = input
        .status
        .as_deref()
        .map(ProjectStatus::parse)
        .transpose()
        .map_err(AppError::validation)?;

    let client_email = input.client_email.map(|e| e.trim().to_lowercase());
    if let Some(email) = &client_email {
        validate_email(email).map_err(AppError::validation)?;
    }
    if let Some(phone) = &input.client_phone {
        validate_phone(phone).map_err(AppError::validation)?;
    }

    let update = UpdateProject {
        client_name: input.client_name,
        project_name: input.project_name,
        client_email,
        client_phone: input.client_phone,
        start_date: input.start_date,
        status,
    };

    let project = ProjectRepo::update(&state.pool, admin.admin_id, project_id, &update)
        .await?
        .ok_or_else(|| AppError::not_found("Project not found or access denied"))?;

    Ok(Json(ProjectResponse {
        message: "Project updated successfully",
        project,
    }))
}

/// DELETE /api/v1/projects/{id}
///
/// Budget items, billing entries, and timeline events cascade with the
/// project row.
pub async fn delete(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let deleted = ProjectRepo::delete(&state.pool, admin.admin_id, project_id).await?;
    if deleted {
        Ok(Json(
            serde_json::json!({ "message": "Project deleted successfully" }),
        ))
    } else {
        Err(AppError::not_found("Project not found or access denied"))
    }
}
