//! Closed status enums for projects, billing entries, and timeline events.
//!
//! Each enum is validated once at the API boundary via [`parse`](ProjectStatus::parse)
//! and stored as its wire string in a TEXT column (enforced by a CHECK
//! constraint in the schema). The wire spellings are the source of truth --
//! the React client sends and renders them verbatim.

use serde::{Deserialize, Serialize};

/// Project lifecycle status. Transitions are one-directional in practice
/// (active -> completed), but the API permits setting either value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "text", rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Completed,
}

impl ProjectStatus {
    pub const VALID_VALUES: &'static [&'static str] = &["active", "completed"];

    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(format!(
                "Invalid status value '{s}'. Must be one of: {}",
                Self::VALID_VALUES.join(", ")
            )),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

/// Billing entry status tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "text", rename_all = "lowercase")]
pub enum BillingStatus {
    Credited,
    Debited,
    Pending,
}

impl BillingStatus {
    pub const VALID_VALUES: &'static [&'static str] = &["credited", "debited", "pending"];

    /// All statuses in summary-breakdown order.
    pub const ALL: &'static [Self] = &[Self::Credited, Self::Debited, Self::Pending];

    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "credited" => Ok(Self::Credited),
            "debited" => Ok(Self::Debited),
            "pending" => Ok(Self::Pending),
            _ => Err(format!(
                "Invalid billing status '{s}'. Must be one of: {}",
                Self::VALID_VALUES.join(", ")
            )),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Credited => "credited",
            Self::Debited => "debited",
            Self::Pending => "pending",
        }
    }
}

impl Default for BillingStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Timeline event status. The state machine is deliberately permissive:
/// any of the three values may be set from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "text", rename_all = "lowercase")]
pub enum EventStatus {
    Pending,
    #[serde(rename = "in-progress")]
    #[sqlx(rename = "in-progress")]
    InProgress,
    Completed,
}

impl EventStatus {
    pub const VALID_VALUES: &'static [&'static str] = &["pending", "in-progress", "completed"];

    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "pending" => Ok(Self::Pending),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(format!(
                "Invalid event status '{s}'. Must be one of: {}",
                Self::VALID_VALUES.join(", ")
            )),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl Default for EventStatus {
    fn default() -> Self {
        Self::Pending
    }
}
