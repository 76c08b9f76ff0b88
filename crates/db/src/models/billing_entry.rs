//! Billing ledger entry model and DTOs.

use serde::Serialize;
use sitedesk_core::status::BillingStatus;
use sitedesk_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A billing entry row from the `billing_entries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingEntry {
    pub id: DbId,
    #[serde(skip_serializing)]
    pub project_id: DbId,
    #[serde(rename = "date")]
    pub entry_date: Timestamp,
    pub billing_amount: f64,
    pub recipient: String,
    pub status: BillingStatus,
    pub additional_notes: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
}

/// DTO for appending a billing entry. The status arrives here already
/// parsed by the API boundary; the date defaults to now when omitted.
#[derive(Debug, Clone)]
pub struct CreateBillingEntry {
    pub billing_amount: f64,
    pub recipient: String,
    pub status: BillingStatus,
    pub entry_date: Option<Timestamp>,
    pub additional_notes: Option<String>,
}

/// DTO for patching a billing entry. Only supplied fields are touched --
/// unlike the original API's budget items, billing updates are sparse.
#[derive(Debug, Clone, Default)]
pub struct UpdateBillingEntry {
    pub billing_amount: Option<f64>,
    pub recipient: Option<String>,
    pub status: Option<BillingStatus>,
    pub entry_date: Option<Timestamp>,
    pub additional_notes: Option<String>,
}
