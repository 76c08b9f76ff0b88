//! Repository for a project's budget: the embedded aggregate on the
//! `projects` row plus the `budget_items` table.
//!
//! Every mutation that touches both an item and the running total runs in a
//! single transaction, taking the project row lock first. That serializes
//! concurrent item mutations per project, so the invariant
//! `budget_total_amount == SUM(items.amount)` holds after every add, patch,
//! and delete. The wholesale replace is the one exception: it stores the
//! caller-supplied total verbatim without re-deriving it from the new items.

use sitedesk_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::budget_item::{BudgetItem, CreateBudgetItem, SetBudget, UpdateBudgetItem};
use crate::models::project::Project;
use crate::repositories::project_repo;

/// Column list shared across queries to avoid repetition.
const ITEM_COLUMNS: &str =
    "id, project_id, cumulative_work, cumulative_percentage, amount, created_at";

/// Outcome of a budget item patch. The two not-found flavors carry different
/// messages at the API surface, so they are distinguished here.
#[derive(Debug)]
pub enum BudgetItemPatch {
    Updated {
        project: Project,
        items: Vec<BudgetItem>,
    },
    ProjectNotFound,
    ItemNotFound,
}

/// Provides budget reads and transactionally consistent mutations.
pub struct BudgetRepo;

impl BudgetRepo {
    /// Fetch the project row and its budget items, ordered by insertion.
    pub async fn fetch(
        pool: &PgPool,
        admin_id: DbId,
        project_id: DbId,
    ) -> Result<Option<(Project, Vec<BudgetItem>)>, sqlx::Error> {
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

        let items = Self::list_items(pool, project_id).await?;
        Ok(Some((project, items)))
    }

    /// Wholesale budget replace. Present fields overwrite stored values;
    /// a present item list replaces the stored list verbatim. The total is
    /// whatever the caller supplied (or the stored value if absent) -- it is
    /// deliberately not recomputed from the new items.
    ///
    /// Returns `None` if no `(id, admin_id)` row matches.
    pub async fn set(
        pool: &PgPool,
        admin_id: DbId,
        project_id: DbId,
        input: &SetBudget,
    ) -> Result<Option<(Project, Vec<BudgetItem>)>, sqlx::Error> {
        let total_amount = input.work_details.as_ref().and_then(|wd| wd.total_amount);
        let items = input.work_details.as_ref().and_then(|wd| wd.items.as_ref());

        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE projects SET
                budget_area_sq_feet = COALESCE($3, budget_area_sq_feet),
                budget_total_amount = COALESCE($4, budget_total_amount),
                updated_at = NOW()
             WHERE id = $1 AND admin_id = $2
             RETURNING {}",
            project_repo::COLUMNS
        );
        let Some(project) = sqlx::query_as::<_, Project>(&query)
            .bind(project_id)
            .bind(admin_id)
            .bind(input.area_in_sq_feet)
            .bind(total_amount)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if let Some(items) = items {
            sqlx::query("DELETE FROM budget_items WHERE project_id = $1")
                .bind(project_id)
                .execute(&mut *tx)
                .await?;
            for item in items {
                Self::insert_item(&mut tx, project_id, item).await?;
            }
        }

        let items = Self::list_items(&mut *tx, project_id).await?;
        tx.commit().await?;
        Ok(Some((project, items)))
    }

    /// Append an item and increment the running total by its amount (zero
    /// when absent), as one transaction. No state is visible where the list
    /// is updated but the total is not, or vice versa.
    ///
    /// Returns `None` if no `(id, admin_id)` row matches.
    pub async fn add_item(
        pool: &PgPool,
        admin_id: DbId,
        project_id: DbId,
        input: &CreateBudgetItem,
    ) -> Result<Option<(Project, Vec<BudgetItem>)>, sqlx::Error> {
        let amount = input.amount.unwrap_or(0.0);

        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE projects SET
                budget_total_amount = budget_total_amount + $3,
                updated_at = NOW()
             WHERE id = $1 AND admin_id = $2
             RETURNING {}",
            project_repo::COLUMNS
        );
        let Some(project) = sqlx::query_as::<_, Project>(&query)
            .bind(project_id)
            .bind(admin_id)
            .bind(amount)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        Self::insert_item(&mut tx, project_id, input).await?;

        let items = Self::list_items(&mut *tx, project_id).await?;
        tx.commit().await?;
        Ok(Some((project, items)))
    }

    /// Patch an item and adjust the running total by the amount delta, as
    /// one transaction. The project row is locked before the item is read,
    /// so two concurrent patches of the same item cannot double-count or
    /// drop a delta.
    pub async fn update_item(
        pool: &PgPool,
        admin_id: DbId,
        project_id: DbId,
        item_id: DbId,
        input: &UpdateBudgetItem,
    ) -> Result<BudgetItemPatch, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if !Self::lock_project(&mut tx, admin_id, project_id).await? {
            return Ok(BudgetItemPatch::ProjectNotFound);
        }

        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM budget_items
             WHERE id = $1 AND project_id = $2
             FOR UPDATE"
        );
        let Some(current) = sqlx::query_as::<_, BudgetItem>(&query)
            .bind(item_id)
            .bind(project_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(BudgetItemPatch::ItemNotFound);
        };

        let delta = input.amount.unwrap_or(current.amount) - current.amount;

        let query = format!(
            "UPDATE budget_items SET
                cumulative_work = COALESCE($3, cumulative_work),
                cumulative_percentage = COALESCE($4, cumulative_percentage),
                amount = COALESCE($5, amount)
             WHERE id = $1 AND project_id = $2
             RETURNING {ITEM_COLUMNS}"
        );
        sqlx::query_as::<_, BudgetItem>(&query)
            .bind(item_id)
            .bind(project_id)
            .bind(&input.cumulative_work)
            .bind(input.cumulative_percentage)
            .bind(input.amount)
            .fetch_one(&mut *tx)
            .await?;

        let project = Self::apply_total_delta(&mut tx, project_id, delta).await?;
        let items = Self::list_items(&mut *tx, project_id).await?;
        tx.commit().await?;
        Ok(BudgetItemPatch::Updated { project, items })
    }

    /// Remove an item and decrement the running total by its amount, as one
    /// transaction. Deleting an id that is already gone is a no-op success:
    /// the amount reads as zero and the total is unchanged.
    ///
    /// Returns `None` if no `(id, admin_id)` row matches.
    pub async fn delete_item(
        pool: &PgPool,
        admin_id: DbId,
        project_id: DbId,
        item_id: DbId,
    ) -> Result<Option<(Project, Vec<BudgetItem>)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if !Self::lock_project(&mut tx, admin_id, project_id).await? {
            return Ok(None);
        }

        let amount: Option<f64> = sqlx::query_scalar(
            "SELECT amount FROM budget_items WHERE id = $1 AND project_id = $2 FOR UPDATE",
        )
        .bind(item_id)
        .bind(project_id)
        .fetch_optional(&mut *tx)
        .await?;
        let amount = amount.unwrap_or(0.0);

        sqlx::query("DELETE FROM budget_items WHERE id = $1 AND project_id = $2")
            .bind(item_id)
            .bind(project_id)
            .execute(&mut *tx)
            .await?;

        let project = Self::apply_total_delta(&mut tx, project_id, -amount).await?;
        let items = Self::list_items(&mut *tx, project_id).await?;
        tx.commit().await?;
        Ok(Some((project, items)))
    }

    // ── Internals ────────────────────────────────────────────────────

    /// Lock the project row for the duration of the transaction. Returns
    /// `false` when the `(id, admin_id)` pair matches no row.
    async fn lock_project(
        tx: &mut Transaction<'_, Postgres>,
        admin_id: DbId,
        project_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let locked: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM projects WHERE id = $1 AND admin_id = $2 FOR UPDATE")
                .bind(project_id)
                .bind(admin_id)
                .fetch_optional(&mut **tx)
                .await?;
        Ok(locked.is_some())
    }

    /// Adjust the running total and bump `updated_at`, returning the fresh
    /// project row.
    async fn apply_total_delta(
        tx: &mut Transaction<'_, Postgres>,
        project_id: DbId,
        delta: f64,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                budget_total_amount = budget_total_amount + $2,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {}",
            project_repo::COLUMNS
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(project_id)
            .bind(delta)
            .fetch_one(&mut **tx)
            .await
    }

    async fn insert_item(
        tx: &mut Transaction<'_, Postgres>,
        project_id: DbId,
        item: &CreateBudgetItem,
    ) -> Result<BudgetItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO budget_items (project_id, cumulative_work, cumulative_percentage, amount)
             VALUES ($1, $2, $3, COALESCE($4, 0))
             RETURNING {ITEM_COLUMNS}"
        );
        sqlx::query_as::<_, BudgetItem>(&query)
            .bind(project_id)
            .bind(&item.cumulative_work)
            .bind(item.cumulative_percentage)
            .bind(item.amount)
            .fetch_one(&mut **tx)
            .await
    }

    async fn list_items<'e, E>(executor: E, project_id: DbId) -> Result<Vec<BudgetItem>, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let query =
            format!("SELECT {ITEM_COLUMNS} FROM budget_items WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, BudgetItem>(&query)
            .bind(project_id)
            .fetch_all(executor)
            .await
    }
}
