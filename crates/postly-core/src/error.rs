//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    /// A unique index rejected the write. The slug pipeline treats this as
    /// a signal to try the next suffix.
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Failures of a single create/update/delete submission.
///
/// Every variant is terminal for the current attempt. The only automatic
/// retry lives inside the slug probe and never surfaces here unless the
/// probe gives up.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("{0}")]
    Validation(String),

    /// The author declined the large-content warning. This is a normal abort.
    #[error("Submission cancelled: content of {chars} characters was not confirmed")]
    ConfirmationDeclined { chars: usize },

    #[error("Could not find a free slug for '{base}' after {attempts} attempts")]
    SlugExhausted { base: String, attempts: u32 },

    #[error("Post {0} not found")]
    NotFound(Uuid),

    #[error(transparent)]
    Storage(#[from] RepoError),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::UniqueViolation(msg) => DomainError::Duplicate(msg),
            other => DomainError::Internal(other.to_string()),
        }
    }
}
