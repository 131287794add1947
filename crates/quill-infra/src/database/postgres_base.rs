use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{DbConn, DbErr, EntityTrait, PrimaryKeyTrait, SqlErr};

use quill_core::ports::{BaseRepository, UniqueConstraint};
use quill_core::{RepoError, ValidationError};

/// Generic PostgreSQL repository implementation.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

/// Map a SeaORM error to a repository error.
///
/// A unique-index violation on `unique` becomes `RepoError::Conflict` naming the
/// offending `value`.
pub(crate) fn map_db_err(err: DbErr, unique: Option<(UniqueConstraint, &str)>) -> RepoError {
    if let Some((constraint, value)) = unique {
        let unique_violation = matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) || {
            let err_str = err.to_string();
            err_str.contains("duplicate") || err_str.contains("unique")
        };
        if unique_violation {
            return constraint.violation(value);
        }
    }

    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        DbErr::RecordNotFound(_) => RepoError::NotFound,
        other => RepoError::Query(other.to_string()),
    }
}

/// A stored row that no longer passes its field validators.
pub(crate) fn invalid_row(err: ValidationError) -> RepoError {
    tracing::error!(field = err.field, "Stored row failed validation");
    RepoError::Query(format!("stored row violates {}: {err}", err.field))
}

#[async_trait]
impl<E, T> BaseRepository<T, i64> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: Sync + Send,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i64>,
    T: TryFrom<E::Model, Error = ValidationError> + Send + Sync + 'static,
{
    async fn get(&self, id: i64) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| map_db_err(e, None))?;

        result.map(T::try_from).transpose().map_err(invalid_row)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| map_db_err(e, None))?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
