//! In-memory storage - used when no database is configured, and in tests.
//!
//! Note: Data is lost on process restart.

mod author_repo;
mod post_repo;
mod unique_index;

pub use author_repo::InMemoryAuthorRepository;
pub use post_repo::InMemoryPostRepository;
pub use unique_index::UniqueIndex;
