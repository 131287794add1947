use std::fmt;

use crate::error::RepoError;

/// A named unique column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniqueConstraint {
    pub table: &'static str,
    pub column: &'static str,
}

impl UniqueConstraint {
    /// The conflict reported when `value` is already taken.
    pub fn violation(&self, value: &str) -> RepoError {
        RepoError::Conflict(format!("{self} already contains '{value}'"))
    }
}

impl fmt::Display for UniqueConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table, self.column)
    }
}

/// Author names are unique across all authors.
pub const AUTHOR_NAME_UNIQUE: UniqueConstraint = UniqueConstraint {
    table: "authors",
    column: "name",
};

/// Storage-side enforcement of a unique column.
///
/// This is a stateful storage capability, kept apart from the pure field
/// validators. Callers must hold whatever lock guards the row write while calling
/// `claim`/`release` so the check and the write commit together.
pub trait UniqueConstraintEnforcer: Send + Sync {
    /// Reserve `value` for row `owner`. Re-claiming a value the owner already holds
    /// succeeds. Another owner's value yields `RepoError::Conflict`.
    fn claim(&mut self, value: &str, owner: i64) -> Result<(), RepoError>;

    /// Drop `owner`'s hold on `value`. No-op if `owner` does not hold it.
    fn release(&mut self, value: &str, owner: i64);
}
