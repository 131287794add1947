use std::sync::Arc;

use crate::domain::{NewPost, Post, PostChanges};
use crate::error::DomainError;
use crate::ports::PostRepository;

const ENTITY: &str = "Post";

/// Post create/read/update/delete.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_post(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
        category: &str,
        summary: Option<String>,
    ) -> Result<Post, DomainError> {
        let post = NewPost::new(title, content, category, summary)?;
        let id = self.repo.insert(post).await?;
        tracing::info!(post_id = id, category, "Post created");
        self.get_post(id).await
    }

    pub async fn update_post(&self, id: i64, changes: PostChanges) -> Result<Post, DomainError> {
        changes.validate()?;
        if changes.is_empty() {
            return self.get_post(id).await;
        }

        self.repo
            .update(id, changes)
            .await
            .map_err(|e| DomainError::from_repo(e, ENTITY, id))?;
        tracing::info!(post_id = id, "Post updated");
        self.get_post(id).await
    }

    pub async fn get_post(&self, id: i64) -> Result<Post, DomainError> {
        self.repo.get(id).await?.ok_or(DomainError::NotFound {
            entity_type: ENTITY,
            id,
        })
    }

    pub async fn delete_post(&self, id: i64) -> Result<(), DomainError> {
        self.repo
            .delete(id)
            .await
            .map_err(|e| DomainError::from_repo(e, ENTITY, id))?;
        tracing::info!(post_id = id, "Post deleted");
        Ok(())
    }
}
