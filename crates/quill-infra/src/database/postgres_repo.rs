//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter};

use quill_core::{RepoError, ValidationError};
use quill_core::domain::{Author, AuthorChanges, NewAuthor, NewPost, PostChanges};
use quill_core::ports::{AUTHOR_NAME_UNIQUE, AuthorRepository, PostRepository};

use super::entity::author::{self, Entity as AuthorEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, invalid_row, map_db_err};

/// PostgreSQL author repository. Name uniqueness rides on the `authors.name`
/// unique index.
pub type PostgresAuthorRepository = PostgresBaseRepository<AuthorEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

fn rejected(err: ValidationError) -> RepoError {
    RepoError::Query(format!("rejected {}: {err}", err.field))
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn insert(&self, author: NewAuthor) -> Result<i64, RepoError> {
        let name = author.name().to_owned();
        let active_model: author::ActiveModel = author.into();
        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| map_db_err(e, Some((AUTHOR_NAME_UNIQUE, name.as_str()))))?;

        tracing::debug!(author_id = model.id, "Inserted author row");
        Ok(model.id)
    }

    async fn update(&self, id: i64, changes: AuthorChanges) -> Result<(), RepoError> {
        changes.validate().map_err(rejected)?;
        let name = changes.name.clone().unwrap_or_default();
        let result = AuthorEntity::update_many()
            .set(author::ActiveModel::from(changes))
            .filter(author::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| map_db_err(e, Some((AUTHOR_NAME_UNIQUE, name.as_str()))))?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(author_id = id, "Updated author row");
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError> {
        let result = AuthorEntity::find()
            .filter(author::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| map_db_err(e, None))?;

        result.map(Author::try_from).transpose().map_err(invalid_row)
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, post: NewPost) -> Result<i64, RepoError> {
        let active_model: post::ActiveModel = post.into();
        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| map_db_err(e, None))?;

        tracing::debug!(post_id = model.id, "Inserted post row");
        Ok(model.id)
    }

    async fn update(&self, id: i64, changes: PostChanges) -> Result<(), RepoError> {
        changes.validate().map_err(rejected)?;
        let result = PostEntity::update_many()
            .set(post::ActiveModel::from(changes))
            .filter(post::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| map_db_err(e, None))?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(post_id = id, "Updated post row");
        Ok(())
    }
}
