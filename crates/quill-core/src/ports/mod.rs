//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod repository;
mod unique;

pub use repository::{AuthorRepository, BaseRepository, PostRepository};
pub use unique::{AUTHOR_NAME_UNIQUE, UniqueConstraint, UniqueConstraintEnforcer};
