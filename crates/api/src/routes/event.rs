//! Route definitions for event-scoped operations.
//!
//! Event status updates and deletes address events directly by id -- the
//! admin id stored on the event is the ownership authority.

use axum::routing::{delete, patch};
use axum::Router;

use crate::handlers::event;
use crate::state::AppState;

/// Routes mounted at `/events`.
///
/// ```text
/// PATCH  /{event_id}/status -> update_status
/// DELETE /{event_id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{event_id}/status", patch(event::update_status))
        .route("/{event_id}", delete(event::delete))
}
