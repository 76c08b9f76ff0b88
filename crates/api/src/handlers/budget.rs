//! Handlers for a project's budget: the wholesale set/get plus item-level
//! CRUD that keeps the running total consistent.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use sitedesk_core::types::DbId;
use sitedesk_core::validation::{validate_non_negative, validate_percentage};
use sitedesk_db::models::budget_item::{
    BudgetItem, CreateBudgetItem, SetBudget, UpdateBudgetItem,
};
use sitedesk_db::models::project::Project;
use sitedesk_db::repositories::{BudgetItemPatch, BudgetRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// The nested budget block as the client renders it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetView {
    pub area_in_sq_feet: Option<f64>,
    pub work_details: WorkDetailsView,
}

/// Work-details block of [`BudgetView`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDetailsView {
    pub total_amount: f64,
    pub items: Vec<BudgetItem>,
}

impl BudgetView {
    fn from_parts(project: &Project, items: Vec<BudgetItem>) -> Self {
        Self {
            area_in_sq_feet: project.budget_area_sq_feet,
            work_details: WorkDetailsView {
                total_amount: project.budget_total_amount,
                items,
            },
        }
    }
}

/// Mutation response: a message plus the refreshed budget.
#[derive(Debug, Serialize)]
pub struct BudgetResponse {
    pub message: &'static str,
    pub budget: BudgetView,
}

/// Response for `GET /projects/{id}/budget`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetDetailsResponse {
    pub project_name: String,
    pub client_name: String,
    pub budget: BudgetView,
}

// ---------------------------------------------------------------------------
// Input validation
// ---------------------------------------------------------------------------

fn validate_item_fields(
    percentage: Option<f64>,
    amount: Option<f64>,
) -> Result<(), AppError> {
    if let Some(pct) = percentage {
        validate_percentage(pct).map_err(AppError::validation)?;
    }
    if let Some(amount) = amount {
        validate_non_negative(amount, "amount").map_err(AppError::validation)?;
    }
    Ok(())
}

fn validate_set_budget(input: &SetBudget) -> Result<(), AppError> {
    if let Some(area) = input.area_in_sq_feet {
        validate_non_negative(area, "areaInSqFeet").map_err(AppError::validation)?;
    }
    if let Some(wd) = &input.work_details {
        if let Some(total) = wd.total_amount {
            validate_non_negative(total, "totalAmount").map_err(AppError::validation)?;
        }
        if let Some(items) = &wd.items {
            for item in items {
                validate_item_fields(item.cumulative_percentage, item.amount)?;
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/projects/{id}/budget
///
/// Wholesale replace: present fields overwrite, a present item list replaces
/// the stored list verbatim, and the total is taken on trust rather than
/// re-derived from the new items.
pub async fn set(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(project_id): Path<DbId>,
    Json(input): Json<SetBudget>,
) -> AppResult<Json<BudgetResponse>> {
    validate_set_budget(&input)?;

    let (project, items) = BudgetRepo::set(&state.pool, admin.admin_id, project_id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Project not found or access denied"))?;

    Ok(Json(BudgetResponse {
        message: "Budget updated successfully",
        budget: BudgetView::from_parts(&project, items),
    }))
}

/// GET /api/v1/projects/{id}/budget
pub async fn get(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<BudgetDetailsResponse>> {
    let (project, items) = BudgetRepo::fetch(&state.pool, admin.admin_id, project_id)
        .await?
        .ok_or_else(|| AppError::not_found("Project not found or access denied"))?;

    Ok(Json(BudgetDetailsResponse {
        project_name: project.project_name.clone(),
        client_name: project.client_name.clone(),
        budget: BudgetView::from_parts(&project, items),
    }))
}

/// POST /api/v1/projects/{id}/budget/items
pub async fn add_item(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateBudgetItem>,
) -> AppResult<(StatusCode, Json<BudgetResponse>)> {
    validate_item_fields(input.cumulative_percentage, input.amount)?;

    let (project, items) = BudgetRepo::add_item(&state.pool, admin.admin_id, project_id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Project not found or access denied"))?;

    Ok((
        StatusCode::CREATED,
        Json(BudgetResponse {
            message: "Budget item added successfully",
            budget: BudgetView::from_parts(&project, items),
        }),
    ))
}

/// PUT /api/v1/projects/{id}/budget/items/{item_id}
pub async fn update_item(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path((project_id, item_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateBudgetItem>,
) -> AppResult<Json<BudgetResponse>> {
    validate_item_fields(input.cumulative_percentage, input.amount)?;

    let outcome =
        BudgetRepo::update_item(&state.pool, admin.admin_id, project_id, item_id, &input).await?;

    match outcome {
        BudgetItemPatch::Updated { project, items } => Ok(Json(BudgetResponse {
            message: "Budget item updated successfully",
            budget: BudgetView::from_parts(&project, items),
        })),
        BudgetItemPatch::ProjectNotFound => {
            Err(AppError::not_found("Project not found or access denied"))
        }
        BudgetItemPatch::ItemNotFound => Err(AppError::not_found("Budget item not found")),
    }
}

/// DELETE /api/v1/projects/{id}/budget/items/{item_id}
///
/// Deleting an item id that is already gone is a no-op success; only an
/// unowned or missing project is an error.
pub async fn delete_item(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path((project_id, item_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<BudgetResponse>> {
    let (project, items) =
        BudgetRepo::delete_item(&state.pool, admin.admin_id, project_id, item_id)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found or access denied"))?;

    Ok(Json(BudgetResponse {
        message: "Budget item deleted successfully",
        budget: BudgetView::from_parts(&project, items),
    }))
}
