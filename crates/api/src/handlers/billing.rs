//! Handlers for a project's billing ledger and its derived summary.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use sitedesk_core::billing::{summarize, BillingTotals};
use sitedesk_core::status::BillingStatus;
use sitedesk_core::types::{DbId, Timestamp};
use sitedesk_core::validation::{validate_additional_notes, validate_non_negative};
use sitedesk_db::models::billing_entry::{
    BillingEntry, CreateBillingEntry, UpdateBillingEntry,
};
use sitedesk_db::repositories::BillingRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /projects/{id}/billing`. The status arrives as a
/// raw string and is parsed before any store access.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBillingEntryRequest {
    pub billing_amount: f64,
    pub recipient: String,
    pub status: Option<String>,
    pub date: Option<Timestamp>,
    pub additional_notes: Option<String>,
}

/// Request body for `PUT /projects/{id}/billing/{billing_id}`. Any subset;
/// omitted fields are left untouched.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBillingEntryRequest {
    pub billing_amount: Option<f64>,
    pub recipient: Option<String>,
    pub status: Option<String>,
    pub date: Option<Timestamp>,
    pub additional_notes: Option<String>,
}

/// Mutation response: a message plus the affected entry.
#[derive(Debug, Serialize)]
pub struct BillingEntryResponse {
    pub message: &'static str,
    pub billing: BillingEntry,
}

/// Response for `GET /projects/{id}/billing`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingListResponse {
    pub project_name: String,
    pub client_name: String,
    pub billing: Vec<BillingEntry>,
}

/// Response for `GET /projects/{id}/billing/summary`.
///
/// Recomputed from the full ledger on every call; `billing_history` is the
/// same entries sorted newest first.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingSummaryResponse {
    pub project_name: String,
    #[serde(flatten)]
    pub totals: BillingTotals,
    pub billing_history: Vec<BillingEntry>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/projects/{id}/billing
pub async fn add(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(project_id): Path<DbId>,
    Json(input): Json<AddBillingEntryRequest>,
) -> AppResult<(StatusCode, Json<BillingEntryResponse>)> {
    // Status first: an out-of-enum value must fail before storage is touched.
    let status = input
        .status
        .as_deref()
        .map(BillingStatus::parse)
        .transpose()
        .map_err(AppError::validation)?
        .unwrap_or_default();

    validate_non_negative(input.billing_amount, "billingAmount").map_err(AppError::validation)?;
    if let Some(notes) = &input.additional_notes {
        validate_additional_notes(notes).map_err(AppError::validation)?;
    }

    let entry = BillingRepo::add(
        &state.pool,
        admin.admin_id,
        project_id,
        &CreateBillingEntry {
            billing_amount: input.billing_amount,
            recipient: input.recipient,
            status,
            entry_date: input.date,
            additional_notes: input.additional_notes,
        },
    )
    .await?
    .ok_or_else(|| AppError::not_found("Project not found or access denied"))?;

    Ok((
        StatusCode::CREATED,
        Json(BillingEntryResponse {
            message: "Billing entry added successfully",
            billing: entry,
        }),
    ))
}

/// GET /api/v1/projects/{id}/billing
pub async fn list(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<BillingListResponse>> {
    let (project, entries) = BillingRepo::list(&state.pool, admin.admin_id, project_id)
        .await?
        .ok_or_else(|| AppError::not_found("Project not found or access denied"))?;

    Ok(Json(BillingListResponse {
        project_name: project.project_name,
        client_name: project.client_name,
        billing: entries,
    }))
}

/// PUT /api/v1/projects/{id}/billing/{billing_id}
pub async fn update(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path((project_id, billing_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateBillingEntryRequest>,
) -> AppResult<Json<BillingEntryResponse>> {
    let status = input
        .status
        .as_deref()
        .map(BillingStatus::parse)
        .transpose()
        .map_err(AppError::validation)?;

    if let Some(amount) = input.billing_amount {
        validate_non_negative(amount, "billingAmount").map_err(AppError::validation)?;
    }
    if let Some(notes) = &input.additional_notes {
        validate_additional_notes(notes).map_err(AppError::validation)?;
    }

    let update = UpdateBillingEntry {
        billing_amount: input.billing_amount,
        recipient: input.recipient,
        status,
        entry_date: input.date,
        additional_notes: input.additional_notes,
    };

    let entry = BillingRepo::update(&state.pool, admin.admin_id, project_id, billing_id, &update)
        .await?
        .ok_or_else(|| AppError::not_found("Billing entry not found or access denied"))?;

    Ok(Json(BillingEntryResponse {
        message: "Billing entry updated successfully",
        billing: entry,
    }))
}

/// DELETE /api/v1/projects/{id}/billing/{billing_id}
///
/// Deleting an entry id that does not exist on an owned project is a no-op
/// success -- an intentional asymmetry from update.
pub async fn delete(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path((project_id, billing_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<serde_json::Value>> {
    let owned = BillingRepo::delete(&state.pool, admin.admin_id, project_id, billing_id).await?;
    if !owned {
        return Err(AppError::not_found("Project not found or access denied"));
    }
    Ok(Json(
        serde_json::json!({ "message": "Billing entry deleted successfully" }),
    ))
}

/// GET /api/v1/projects/{id}/billing/summary
pub async fn summary(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<BillingSummaryResponse>> {
    let (project, entries) = BillingRepo::list(&state.pool, admin.admin_id, project_id)
        .await?
        .ok_or_else(|| AppError::not_found("Project not found or access denied"))?;

    let totals = summarize(entries.iter().map(|e| (e.status, e.billing_amount)));

    let mut history = entries;
    history.sort_by(|a, b| b.entry_date.cmp(&a.entry_date));

    Ok(Json(BillingSummaryResponse {
        project_name: project.project_name,
        totals,
        billing_history: history,
    }))
}
