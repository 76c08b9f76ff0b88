//! Route definitions for the `/projects` resource.
//!
//! Also nests budget, billing, and event routes under
//! `/projects/{id}/...`, plus the static event-metadata catalog.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{billing, budget, event, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                 -> list
/// POST   /                                 -> create
/// GET    /event-metadata                   -> event::metadata
/// GET    /{id}                             -> get_by_id
/// PUT    /{id}                             -> update
/// DELETE /{id}                             -> delete
///
/// POST   /{id}/budget                      -> budget::set
/// GET    /{id}/budget                      -> budget::get
/// POST   /{id}/budget/items                -> budget::add_item
/// PUT    /{id}/budget/items/{item_id}      -> budget::update_item
/// DELETE /{id}/budget/items/{item_id}      -> budget::delete_item
///
/// POST   /{id}/billing                     -> billing::add
/// GET    /{id}/billing                     -> billing::list
/// GET    /{id}/billing/summary             -> billing::summary
/// PUT    /{id}/billing/{billing_id}        -> billing::update
/// DELETE /{id}/billing/{billing_id}        -> billing::delete
///
/// POST   /{id}/events                      -> event::create
/// GET    /{id}/events                      -> event::list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/event-metadata", get(event::metadata))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/budget", post(budget::set).get(budget::get))
        .route("/{id}/budget/items", post(budget::add_item))
        .route(
            "/{id}/budget/items/{item_id}",
            axum::routing::put(budget::update_item).delete(budget::delete_item),
        )
        .route("/{id}/billing", post(billing::add).get(billing::list))
        .route("/{id}/billing/summary", get(billing::summary))
        .route(
            "/{id}/billing/{billing_id}",
            axum::routing::put(billing::update).delete(billing::delete),
        )
        .route("/{id}/events", post(event::create).get(event::list))
}
