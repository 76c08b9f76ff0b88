//! Repository for the `projects` table.

use sitedesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, admin_id, client_name, project_name, client_email, \
    client_phone, start_date, status, budget_area_sq_feet, budget_total_amount, \
    created_at, updated_at";

/// Provides CRUD operations for projects, always scoped by owning admin.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project for the given admin, returning the created row.
    ///
    /// Status starts as `active`; `start_date` defaults to now when omitted.
    pub async fn create(
        pool: &PgPool,
        admin_id: DbId,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (admin_id, client_name, project_name, client_email, client_phone, start_date)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(admin_id)
            .bind(&input.client_name)
            .bind(&input.project_name)
            .bind(&input.client_email)
            .bind(&input.client_phone)
            .bind(input.start_date)
            .fetch_one(pool)
            .await
    }

    /// Find a project by `(id, admin_id)`. A project owned by a different
    /// admin is indistinguishable from a missing one.
    pub async fn find_by_id(
        pool: &PgPool,
        admin_id: DbId,
        project_id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1 AND admin_id = $2");
        sqlx::query_as::<_, Project>(&query)
            .bind(project_id)
            .bind(admin_id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects owned by the admin, newest created first.
    pub async fn list_by_admin(pool: &PgPool, admin_id: DbId) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE admin_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(admin_id)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no `(id, admin_id)` row matches.
    pub async fn update(
        pool: &PgPool,
        admin_id: DbId,
        project_id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                client_name = COALESCE($3, client_name),
                project_name = COALESCE($4, project_name),
                client_email = COALESCE($5, client_email),
                client_phone = COALESCE($6, client_phone),
                start_date = COALESCE($7, start_date),
                status = COALESCE($8, status),
                updated_at = NOW()
             WHERE id = $1 AND admin_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(project_id)
            .bind(admin_id)
            .bind(&input.client_name)
            .bind(&input.project_name)
            .bind(&input.client_email)
            .bind(&input.client_phone)
            .bind(input.start_date)
            .bind(input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by `(id, admin_id)`. Budget items, billing entries,
    /// and timeline events cascade. Returns `true` if a row was removed.
    pub async fn delete(
        pool: &PgPool,
        admin_id: DbId,
        project_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1 AND admin_id = $2")
            .bind(project_id)
            .bind(admin_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
