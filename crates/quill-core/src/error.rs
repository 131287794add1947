//! Domain-level error types.

use thiserror::Error;

/// A field value rejected by its validator.
///
/// Displays as the bare message so callers can show it to users as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: i64 },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(RepoError),
}

impl DomainError {
    /// Map a repository error for the entity identified by `entity_type` / `id`.
    pub(crate) fn from_repo(err: RepoError, entity_type: &'static str, id: i64) -> Self {
        match err {
            RepoError::NotFound => DomainError::NotFound { entity_type, id },
            other => other.into(),
        }
    }
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Conflict(msg) => DomainError::Conflict(msg),
            other => DomainError::Storage(other),
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Conflict(String),
}
