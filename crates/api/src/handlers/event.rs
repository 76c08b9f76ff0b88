//! Handlers for project timeline events and the event-metadata catalog.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use sitedesk_core::event_catalog::{type_label, validate_event_data, EVENT_CATALOG};
use sitedesk_core::status::EventStatus;
use sitedesk_core::types::{DbId, Timestamp};
use sitedesk_db::models::project_event::{CreateProjectEvent, ProjectEvent};
use sitedesk_db::repositories::{ProjectEventRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /projects/{id}/events`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: serde_json::Value,
    pub status: Option<String>,
    pub event_date: Option<Timestamp>,
}

/// Request body for `PATCH /events/{event_id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateEventStatusRequest {
    pub status: String,
}

/// An event annotated with the human-readable label for its type, resolved
/// from the catalog (falls back to the raw type string for types removed
/// after the event was created).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventWithLabel {
    #[serde(flatten)]
    pub event: ProjectEvent,
    pub type_label: String,
}

impl From<ProjectEvent> for EventWithLabel {
    fn from(event: ProjectEvent) -> Self {
        let type_label = type_label(&event.event_type).to_string();
        Self { event, type_label }
    }
}

/// Mutation response: a message plus the affected event.
#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub message: &'static str,
    pub event: EventWithLabel,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/projects/event-metadata
///
/// The static catalog, keyed by event type, for the client to render event
/// forms from.
pub async fn metadata(_admin: AuthAdmin) -> Json<serde_json::Value> {
    let catalog: serde_json::Map<String, serde_json::Value> = EVENT_CATALOG
        .iter()
        .map(|spec| {
            (
                spec.key.to_string(),
                serde_json::json!({
                    "label": spec.label,
                    "fields": spec.fields,
                }),
            )
        })
        .collect();
    Json(serde_json::Value::Object(catalog))
}

/// POST /api/v1/projects/{id}/events
pub async fn create(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateEventRequest>,
) -> AppResult<(StatusCode, Json<EventResponse>)> {
    ProjectRepo::find_by_id(&state.pool, admin.admin_id, project_id)
        .await?
        .ok_or_else(|| AppError::not_found("Project not found or access denied"))?;

    validate_event_data(&input.event_type, &input.data)?;

    let status = input
        .status
        .as_deref()
        .map(EventStatus::parse)
        .transpose()
        .map_err(AppError::validation)?
        .unwrap_or_default();

    let event = ProjectEventRepo::create(
        &state.pool,
        &CreateProjectEvent {
            project_id,
            admin_id: admin.admin_id,
            event_type: input.event_type,
            data: input.data,
            status,
            event_date: input.event_date,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(EventResponse {
            message: "Event created successfully",
            event: event.into(),
        }),
    ))
}

/// GET /api/v1/projects/{id}/events
pub async fn list(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<EventWithLabel>>> {
    ProjectRepo::find_by_id(&state.pool, admin.admin_id, project_id)
        .await?
        .ok_or_else(|| AppError::not_found("Project not found or access denied"))?;

    let events = ProjectEventRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(events.into_iter().map(EventWithLabel::from).collect()))
}

/// PATCH /api/v1/events/{event_id}/status
///
/// The state machine is permissive: any of the three values may be set from
/// any other. The event's own admin id is the authority, no project hop.
pub async fn update_status(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(event_id): Path<DbId>,
    Json(input): Json<UpdateEventStatusRequest>,
) -> AppResult<Json<EventResponse>> {
    let status = EventStatus::parse(&input.status).map_err(AppError::validation)?;

    let event = ProjectEventRepo::update_status(&state.pool, admin.admin_id, event_id, status)
        .await?
        .ok_or_else(|| AppError::not_found("Event not found or access denied"))?;

    Ok(Json(EventResponse {
        message: "Event status updated successfully",
        event: event.into(),
    }))
}

/// DELETE /api/v1/events/{event_id}
pub async fn delete(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(event_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let deleted = ProjectEventRepo::delete(&state.pool, admin.admin_id, event_id).await?;
    if deleted {
        Ok(Json(
            serde_json::json!({ "message": "Event deleted successfully" }),
        ))
    } else {
        Err(AppError::not_found("Event not found or access denied"))
    }
}
