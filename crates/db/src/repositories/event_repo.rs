//! Repository for the `project_events` table.
//!
//! Status updates and deletes match `(event_id, admin_id)` directly -- the
//! admin id stored on the event is the authority, no project hop needed.

use sitedesk_core::status::EventStatus;
use sitedesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::project_event::{CreateProjectEvent, ProjectEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, admin_id, event_type, data, status, event_date, created_at, updated_at";

/// Provides timeline operations for project events.
pub struct ProjectEventRepo;

impl ProjectEventRepo {
    /// Insert a new event, returning the created row. `event_date` defaults
    /// to now when omitted.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProjectEvent,
    ) -> Result<ProjectEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_events
                (project_id, admin_id, event_type, data, status, event_date)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectEvent>(&query)
            .bind(input.project_id)
            .bind(input.admin_id)
            .bind(&input.event_type)
            .bind(&input.data)
            .bind(input.status)
            .bind(input.event_date)
            .fetch_one(pool)
            .await
    }

    /// List all events for a project, newest event date first. Project
    /// ownership is checked by the caller before this runs.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_events
             WHERE project_id = $1
             ORDER BY event_date DESC"
        );
        sqlx::query_as::<_, ProjectEvent>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Set an event's status by `(event_id, admin_id)`.
    ///
    /// Returns `None` when the pair matches no row.
    pub async fn update_status(
        pool: &PgPool,
        admin_id: DbId,
        event_id: DbId,
        status: EventStatus,
    ) -> Result<Option<ProjectEvent>, sqlx::Error> {
        let query = format!(
            "UPDATE project_events SET status = $3, updated_at = NOW()
             WHERE id = $1 AND admin_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectEvent>(&query)
            .bind(event_id)
            .bind(admin_id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event by `(event_id, admin_id)`. Returns `true` if a row
    /// was removed.
    pub async fn delete(
        pool: &PgPool,
        admin_id: DbId,
        event_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_events WHERE id = $1 AND admin_id = $2")
            .bind(event_id)
            .bind(admin_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
