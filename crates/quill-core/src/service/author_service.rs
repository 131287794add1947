use std::sync::Arc;

use crate::domain::{Author, AuthorChanges, NewAuthor};
use crate::error::DomainError;
use crate::ports::AuthorRepository;

const ENTITY: &str = "Author";

/// Author create/read/update/delete.
///
/// Name uniqueness is left to the repository; a duplicate surfaces as
/// `DomainError::Conflict`, never as a validation failure.
#[derive(Clone)]
pub struct AuthorService {
    repo: Arc<dyn AuthorRepository>,
}

impl AuthorService {
    pub fn new(repo: Arc<dyn AuthorRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_author(
        &self,
        name: impl Into<String>,
        phone_number: Option<String>,
    ) -> Result<Author, DomainError> {
        let author = NewAuthor::new(name, phone_number)?;
        let id = self.repo.insert(author).await?;
        tracing::info!(author_id = id, "Author created");
        self.get_author(id).await
    }

    /// Validate `changes`, persist them and return the stored author.
    pub async fn update_author(
        &self,
        id: i64,
        changes: AuthorChanges,
    ) -> Result<Author, DomainError> {
        changes.validate()?;
        if changes.is_empty() {
            return self.get_author(id).await;
        }

        self.repo
            .update(id, changes)
            .await
            .map_err(|e| DomainError::from_repo(e, ENTITY, id))?;
        tracing::info!(author_id = id, "Author updated");
        self.get_author(id).await
    }

    pub async fn get_author(&self, id: i64) -> Result<Author, DomainError> {
        self.repo
            .get(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: ENTITY,
                id,
            })
    }

    pub async fn delete_author(&self, id: i64) -> Result<(), DomainError> {
        self.repo
            .delete(id)
            .await
            .map_err(|e| DomainError::from_repo(e, ENTITY, id))?;
        tracing::info!(author_id = id, "Author deleted");
        Ok(())
    }
}
