//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for sparse patches
//!
//! Entities serialize in camelCase -- the wire format the React client
//! consumes.

pub mod admin;
pub mod billing_entry;
pub mod budget_item;
pub mod project;
pub mod project_event;
