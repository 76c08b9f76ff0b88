//! Field-shape validators for client-supplied project data.
//!
//! These run at the API boundary before any store access; the schema CHECK
//! constraints are a second line of defence, not the primary one.

use std::sync::LazyLock;

/// Same permissive shape the client-side form uses: something@something.tld.
static EMAIL_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

/// Exactly 10 digits, no separators.
static PHONE_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^\d{10}$").expect("valid regex"));

/// Maximum length of a billing entry's free-text notes.
pub const MAX_ADDITIONAL_NOTES_LEN: usize = 500;

pub fn validate_email(email: &str) -> Result<(), String> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err("Please provide a valid email address".to_string())
    }
}

pub fn validate_phone(phone: &str) -> Result<(), String> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err("Please provide a valid 10-digit phone number".to_string())
    }
}

/// A monetary amount or area figure. Negative values never reach storage.
pub fn validate_non_negative(value: f64, field: &str) -> Result<(), String> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(format!("{field} must be a non-negative number"))
    }
}

/// Budget item completion percentage, bounded to [0, 100].
pub fn validate_percentage(value: f64) -> Result<(), String> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err("cumulativePercentage must be between 0 and 100".to_string())
    }
}

pub fn validate_additional_notes(notes: &str) -> Result<(), String> {
    if notes.chars().count() <= MAX_ADDITIONAL_NOTES_LEN {
        Ok(())
    } else {
        Err(format!(
            "additionalNotes must be at most {MAX_ADDITIONAL_NOTES_LEN} characters"
        ))
    }
}
