use std::collections::HashMap;

use quill_core::RepoError;
use quill_core::ports::{UniqueConstraint, UniqueConstraintEnforcer};

/// Value -> owning row id map for one unique column.
///
/// Not synchronized on its own; it lives inside the table it guards so the
/// table's write lock covers both the claim and the row write.
#[derive(Debug)]
pub struct UniqueIndex {
    constraint: UniqueConstraint,
    owners: HashMap<String, i64>,
}

impl UniqueIndex {
    pub fn new(constraint: UniqueConstraint) -> Self {
        Self {
            constraint,
            owners: HashMap::new(),
        }
    }

    /// The row currently holding `value`.
    pub fn owner(&self, value: &str) -> Option<i64> {
        self.owners.get(value).copied()
    }
}

impl UniqueConstraintEnforcer for UniqueIndex {
    fn claim(&mut self, value: &str, owner: i64) -> Result<(), RepoError> {
        match self.owners.get(value) {
            Some(&holder) if holder != owner => Err(self.constraint.violation(value)),
            Some(_) => Ok(()),
            None => {
                self.owners.insert(value.to_string(), owner);
                Ok(())
            }
        }
    }

    fn release(&mut self, value: &str, owner: i64) {
        if self.owners.get(value) == Some(&owner) {
            self.owners.remove(value);
        }
    }
}
