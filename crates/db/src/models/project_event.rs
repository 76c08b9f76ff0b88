//! Project timeline event model and DTOs.

use serde::Serialize;
use sitedesk_core::status::EventStatus;
use sitedesk_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A timeline event row from the `project_events` table.
///
/// The event carries its owning admin id directly, so status updates and
/// deletes match `(event_id, admin_id)` without a project-ownership hop.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEvent {
    pub id: DbId,
    pub project_id: DbId,
    pub admin_id: DbId,
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: serde_json::Value,
    pub status: EventStatus,
    pub event_date: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording a new timeline event. The payload has already passed
/// catalog validation by the time it reaches this crate.
#[derive(Debug, Clone)]
pub struct CreateProjectEvent {
    pub project_id: DbId,
    pub admin_id: DbId,
    pub event_type: String,
    pub data: serde_json::Value,
    pub status: EventStatus,
    pub event_date: Option<Timestamp>,
}
