//! # Quill Infrastructure
//!
//! Concrete implementations of the storage ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM
//!
//! Build with `default-features = false` for in-memory storage only.

pub mod database;
pub mod memory;

pub use database::DatabaseConfig;
pub use memory::{InMemoryAuthorRepository, InMemoryPostRepository, UniqueIndex};

#[cfg(feature = "postgres")]
pub use database::{PostgresAuthorRepository, PostgresPostRepository};
