pub mod auth;
pub mod event;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                          register (public)
/// /auth/login                             login (public)
/// /auth/logout                            logout (requires auth)
///
/// /projects                               list, create
/// /projects/event-metadata                event-type catalog
/// /projects/{id}                          get, update, delete
///
/// /projects/{id}/budget                   set, get
/// /projects/{id}/budget/items             add item
/// /projects/{id}/budget/items/{item_id}   update, delete item
///
/// /projects/{id}/billing                  add, list
/// /projects/{id}/billing/summary          derived summary
/// /projects/{id}/billing/{billing_id}     update, delete
///
/// /projects/{id}/events                   create, list
/// /events/{event_id}/status               update status (PATCH)
/// /events/{event_id}                      delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/projects", project::router())
        .nest("/events", event::router())
}
