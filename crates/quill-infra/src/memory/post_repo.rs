use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use quill_core::RepoError;
use quill_core::domain::{NewPost, Post, PostChanges};
use quill_core::ports::{BaseRepository, PostRepository};

struct PostTable {
    rows: BTreeMap<i64, Post>,
    next_id: i64,
}

/// In-memory post storage.
pub struct InMemoryPostRepository {
    table: RwLock<PostTable>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(PostTable {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, i64> for InMemoryPostRepository {
    async fn get(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        table.rows.remove(&id).ok_or(RepoError::NotFound)?;
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> Result<i64, RepoError> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;
        table.rows.insert(id, post.into_post(id, Utc::now()));
        tracing::debug!(post_id = id, "Inserted post row");
        Ok(id)
    }

    async fn update(&self, id: i64, changes: PostChanges) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        let row = table.rows.get_mut(&id).ok_or(RepoError::NotFound)?;
        row.apply(changes)
            .map_err(|e| RepoError::Query(format!("rejected {}: {e}", e.field)))?;
        row.touch(Utc::now());
        tracing::debug!(post_id = id, "Updated post row");
        Ok(())
    }
}
