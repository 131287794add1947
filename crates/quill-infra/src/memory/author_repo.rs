use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use quill_core::RepoError;
use quill_core::domain::{Author, AuthorChanges, NewAuthor};
use quill_core::ports::{
    AUTHOR_NAME_UNIQUE, AuthorRepository, BaseRepository, UniqueConstraintEnforcer,
};

use super::unique_index::UniqueIndex;

struct AuthorTable {
    rows: BTreeMap<i64, Author>,
    next_id: i64,
    names: UniqueIndex,
}

/// In-memory author storage with a unique index on `name`.
pub struct InMemoryAuthorRepository {
    table: RwLock<AuthorTable>,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(AuthorTable {
                rows: BTreeMap::new(),
                next_id: 1,
                names: UniqueIndex::new(AUTHOR_NAME_UNIQUE),
            }),
        }
    }
}

impl Default for InMemoryAuthorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Author, i64> for InMemoryAuthorRepository {
    async fn get(&self, id: i64) -> Result<Option<Author>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        let author = table.rows.remove(&id).ok_or(RepoError::NotFound)?;
        table.names.release(author.name(), id);
        Ok(())
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn insert(&self, author: NewAuthor) -> Result<i64, RepoError> {
        // Claim and row write happen under one write guard.
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.names.claim(author.name(), id)?;
        table.next_id += 1;
        table.rows.insert(id, author.into_author(id, Utc::now()));
        tracing::debug!(author_id = id, "Inserted author row");
        Ok(id)
    }

    async fn update(&self, id: i64, changes: AuthorChanges) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        let mut updated = table.rows.get(&id).cloned().ok_or(RepoError::NotFound)?;
        let old_name = updated.name().to_string();
        updated
            .apply(changes)
            .map_err(|e| RepoError::Query(format!("rejected {}: {e}", e.field)))?;

        if updated.name() != old_name {
            table.names.claim(updated.name(), id)?;
            table.names.release(&old_name, id);
        }

        updated.touch(Utc::now());
        table.rows.insert(id, updated);
        tracing::debug!(author_id = id, "Updated author row");
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError> {
        let table = self.table.read().await;
        Ok(table
            .names
            .owner(name)
            .and_then(|id| table.rows.get(&id).cloned()))
    }
}
