//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input at the boundary (status enums, email/phone
//! shapes, amount ranges), delegate to the corresponding repository in
//! `sitedesk_db`, and map errors via [`AppError`](crate::error::AppError).

pub mod auth;
pub mod billing;
pub mod budget;
pub mod event;
pub mod project;
