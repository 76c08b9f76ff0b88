/// Domain error taxonomy. The API layer maps variants onto HTTP statuses:
/// Validation -> 400, Unauthorized -> 401, NotFound -> 404, Conflict -> 409,
/// Internal -> 500.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Entity absent or not owned by the caller. The two cases are
    /// deliberately indistinguishable: a record belonging to another admin
    /// reports the same message as a record that does not exist.
    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
