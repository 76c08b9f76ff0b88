//! Admin account model and DTOs.

use serde::Serialize;
use sitedesk_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// An admin row from the `admins` table.
///
/// The password hash never leaves the persistence/auth layers, so the entity
/// is not serialized directly; use [`AdminInfo`] for API responses.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public admin info embedded in auth responses.
#[derive(Debug, Clone, Serialize)]
pub struct AdminInfo {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

impl From<&Admin> for AdminInfo {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id,
            name: admin.name.clone(),
            email: admin.email.clone(),
        }
    }
}

/// DTO for creating a new admin. The hash is produced by the API layer;
/// plaintext passwords never reach this crate.
#[derive(Debug, Clone)]
pub struct CreateAdmin {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
