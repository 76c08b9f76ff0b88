//! Repository for the `billing_entries` table.
//!
//! The ledger has no maintained aggregate: the summary endpoint recomputes
//! totals from the full entry list on every call, so no mutation here needs
//! more than a single statement.

use sitedesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::billing_entry::{BillingEntry, CreateBillingEntry, UpdateBillingEntry};
use crate::models::project::Project;
use crate::repositories::project_repo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, entry_date, billing_amount, recipient, status, additional_notes, created_at";

/// Same columns qualified with the `be` alias, for the update-with-join.
const QUALIFIED_COLUMNS: &str = "be.id, be.project_id, be.entry_date, be.billing_amount, \
    be.recipient, be.status, be.additional_notes, be.created_at";

/// Provides ledger operations for billing entries, scoped by owning admin.
pub struct BillingRepo;

impl BillingRepo {
    /// Append an entry to an owned project's ledger, returning the inserted
    /// row. The ownership check and the insert are one statement, so the
    /// returned entry is exact even under concurrent appends.
    ///
    /// Returns `None` if no `(id, admin_id)` row matches.
    pub async fn add(
        pool: &PgPool,
        admin_id: DbId,
        project_id: DbId,
        input: &CreateBillingEntry,
    ) -> Result<Option<BillingEntry>, sqlx::Error> {
        let query = format!(
            "INSERT INTO billing_entries
                (project_id, entry_date, billing_amount, recipient, status, additional_notes)
             SELECT $1, COALESCE($3, NOW()), $4, $5, $6, $7
             WHERE EXISTS (SELECT 1 FROM projects WHERE id = $1 AND admin_id = $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BillingEntry>(&query)
            .bind(project_id)
            .bind(admin_id)
            .bind(input.entry_date)
            .bind(input.billing_amount)
            .bind(&input.recipient)
            .bind(input.status)
            .bind(&input.additional_notes)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the project row and its full ledger in insertion order.
    pub async fn list(
        pool: &PgPool,
        admin_id: DbId,
        project_id: DbId,
    ) -> Result<Option<(Project, Vec<BillingEntry>)>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM projects WHERE id = $1 AND admin_id = $2",
            project_repo::COLUMNS
        );
        let Some(project) = sqlx::query_as::<_, Project>(&query)
            .bind(project_id)
            .bind(admin_id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let query =
            format!("SELECT {COLUMNS} FROM billing_entries WHERE project_id = $1 ORDER BY id");
        let entries = sqlx::query_as::<_, BillingEntry>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await?;

        Ok(Some((project, entries)))
    }

    /// Sparse-patch an entry: only supplied fields are touched. Matches by
    /// `(billing_id, project_id, admin_id)`; returns `None` when the triple
    /// matches no row.
    pub async fn update(
        pool: &PgPool,
        admin_id: DbId,
        project_id: DbId,
        billing_id: DbId,
        input: &UpdateBillingEntry,
    ) -> Result<Option<BillingEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE billing_entries be SET
                billing_amount = COALESCE($4, be.billing_amount),
                recipient = COALESCE($5, be.recipient),
                status = COALESCE($6, be.status),
                entry_date = COALESCE($7, be.entry_date),
                additional_notes = COALESCE($8, be.additional_notes)
             FROM projects p
             WHERE be.id = $1 AND be.project_id = $2
               AND p.id = be.project_id AND p.admin_id = $3
             RETURNING {QUALIFIED_COLUMNS}"
        );
        sqlx::query_as::<_, BillingEntry>(&query)
            .bind(billing_id)
            .bind(project_id)
            .bind(admin_id)
            .bind(input.billing_amount)
            .bind(&input.recipient)
            .bind(input.status)
            .bind(input.entry_date)
            .bind(&input.additional_notes)
            .fetch_optional(pool)
            .await
    }

    /// Remove an entry from an owned project's ledger. Deleting an id that
    /// does not exist is a no-op success; only an unowned/missing project
    /// reports `false`.
    pub async fn delete(
        pool: &PgPool,
        admin_id: DbId,
        project_id: DbId,
        billing_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let owned: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM projects WHERE id = $1 AND admin_id = $2")
                .bind(project_id)
                .bind(admin_id)
                .fetch_optional(pool)
                .await?;
        if owned.is_none() {
            return Ok(false);
        }

        sqlx::query("DELETE FROM billing_entries WHERE id = $1 AND project_id = $2")
            .bind(billing_id)
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(true)
    }
}
