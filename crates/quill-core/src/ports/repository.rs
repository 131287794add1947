use async_trait::async_trait;

use crate::domain::{Author, AuthorChanges, NewAuthor, NewPost, Post, PostChanges};
use crate::error::RepoError;

/// Generic repository trait shared by every stored entity.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its id.
    async fn get(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its id. `RepoError::NotFound` if nothing was deleted.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Author storage.
///
/// Implementations assign `id` and `created_at` on insert, stamp `updated_at` on
/// every update and enforce [`AUTHOR_NAME_UNIQUE`](super::AUTHOR_NAME_UNIQUE),
/// reporting a collision as `RepoError::Conflict`.
#[async_trait]
pub trait AuthorRepository: BaseRepository<Author, i64> {
    /// Store a validated author and return its generated id.
    async fn insert(&self, author: NewAuthor) -> Result<i64, RepoError>;

    /// Persist already-validated changes. `RepoError::NotFound` if `id` is unknown.
    async fn update(&self, id: i64, changes: AuthorChanges) -> Result<(), RepoError>;

    /// Find an author by exact name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError>;
}

/// Post storage. Same timestamp contract as [`AuthorRepository`].
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i64> {
    async fn insert(&self, post: NewPost) -> Result<i64, RepoError>;

    async fn update(&self, id: i64, changes: PostChanges) -> Result<(), RepoError>;
}
