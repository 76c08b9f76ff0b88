//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sitedesk_core::status::ProjectStatus;
use sitedesk_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A project row from the `projects` table.
///
/// The budget aggregate fields live on the project row itself so item
/// mutations can adjust the running total in the same transaction.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub admin_id: DbId,
    pub client_name: String,
    pub project_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub start_date: Timestamp,
    pub status: ProjectStatus,
    #[serde(skip_serializing)]
    pub budget_area_sq_feet: Option<f64>,
    #[serde(skip_serializing)]
    pub budget_total_amount: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project. Status always starts as active;
/// `start_date` defaults to creation time when omitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub client_name: String,
    pub project_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub start_date: Option<Timestamp>,
}

/// DTO for updating an existing project. All fields are optional; the
/// status arrives here already parsed by the API boundary.
#[derive(Debug, Clone, Default)]
pub struct UpdateProject {
    pub client_name: Option<String>,
    pub project_name: Option<String>,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub start_date: Option<Timestamp>,
    pub status: Option<ProjectStatus>,
}
