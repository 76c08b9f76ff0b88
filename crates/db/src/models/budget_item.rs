//! Budget work-item model and DTOs.

use serde::{Deserialize, Serialize};
use sitedesk_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A budget work item row from the `budget_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
    pub id: DbId,
    #[serde(skip_serializing)]
    pub project_id: DbId,
    pub cumulative_work: Option<String>,
    pub cumulative_percentage: Option<f64>,
    pub amount: f64,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
}

/// DTO for appending a budget item. A missing amount is treated as zero for
/// both the item and the total increment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBudgetItem {
    pub cumulative_work: Option<String>,
    pub cumulative_percentage: Option<f64>,
    pub amount: Option<f64>,
}

/// DTO for patching a budget item. Only supplied fields are applied; an
/// amount change also adjusts the project's running total by the delta.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBudgetItem {
    pub cumulative_work: Option<String>,
    pub cumulative_percentage: Option<f64>,
    pub amount: Option<f64>,
}

/// DTO for the wholesale budget replace (`POST /projects/{id}/budget`).
///
/// Any present field overwrites the stored value; `items`, when present,
/// replaces the entire list verbatim. The total is NOT re-derived from the
/// new items -- the caller is trusted to supply a matching total in the
/// same call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetBudget {
    pub area_in_sq_feet: Option<f64>,
    pub work_details: Option<SetWorkDetails>,
}

/// Nested work-details block of [`SetBudget`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetWorkDetails {
    pub total_amount: Option<f64>,
    pub items: Option<Vec<CreateBudgetItem>>,
}
