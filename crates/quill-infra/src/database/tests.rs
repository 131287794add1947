#[cfg(test)]
mod tests {
    use crate::database::entity::{author, post};
    use crate::database::postgres_repo::{PostgresAuthorRepository, PostgresPostRepository};
    use quill_core::RepoError;
    use quill_core::domain::{Author, AuthorChanges, Category, NewAuthor, NewPost, Post, PostChanges};
    use quill_core::ports::{AuthorRepository, BaseRepository, PostRepository};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};

    fn author_model(id: i64, name: &str) -> author::Model {
        author::Model {
            id,
            name: name.to_owned(),
            phone_number: Some("5551234567".to_owned()),
            created_at: chrono::Utc::now().into(),
            updated_at: None,
        }
    }

    fn post_model(id: i64, category: &str) -> post::Model {
        post::Model {
            id,
            title: "Top 10 Facts".to_owned(),
            content: "x".repeat(260),
            category: category.to_owned(),
            summary: Some("short".to_owned()),
            created_at: chrono::Utc::now().into(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_find_author_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![author_model(1, "Jane Doe")]])
            .into_connection();

        let repo = PostgresAuthorRepository::new(db);
        let result: Option<Author> = repo.get(1).await.unwrap();

        let author = result.unwrap();
        assert_eq!(author.id(), 1);
        assert_eq!(author.name(), "Jane Doe");
        assert_eq!(author.phone_number(), Some("5551234567"));
    }

    #[tokio::test]
    async fn test_find_author_by_name() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![author_model(4, "Jane Doe")]])
            .into_connection();

        let repo = PostgresAuthorRepository::new(db);
        let author = repo.find_by_name("Jane Doe").await.unwrap().unwrap();

        assert_eq!(author.id(), 4);
        assert_eq!(author.name(), "Jane Doe");
    }

    #[tokio::test]
    async fn test_find_author_by_unknown_name() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<author::Model>::new()])
            .into_connection();

        let repo = PostgresAuthorRepository::new(db);
        assert!(repo.find_by_name("Nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![post_model(3, "Non-Fiction")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let result: Option<Post> = repo.get(3).await.unwrap();

        let post = result.unwrap();

        assert_eq!(post.title(), "Top 10 Facts");
        assert_eq!(post.category(), Category::NonFiction);
    }

    #[tokio::test]
    async fn test_invalid_stored_row_is_reported() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![post_model(3, "Poetry")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let result: Result<Option<Post>, RepoError> = repo.get(3).await;
        assert!(matches!(result, Err(RepoError::Query(_))));
    }

    #[tokio::test]
    async fn test_insert_author_returns_generated_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![author_model(42, "Jane Doe")]])
            .into_connection();

        let repo = PostgresAuthorRepository::new(db);
        let author = NewAuthor::new("Jane Doe", Some("5551234567".into())).unwrap();
        assert_eq!(repo.insert(author).await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_insert_duplicate_author_name_conflicts() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"authors_name_key\"".into(),
            ))])
            .into_connection();

        let repo = PostgresAuthorRepository::new(db);
        let author = NewAuthor::new("Jane Doe", None).unwrap();
        let err = repo.insert(author).await.unwrap_err();
        assert_eq!(
            err,
            RepoError::Conflict("authors.name already contains 'Jane Doe'".into())
        );
    }

    #[tokio::test]
    async fn test_insert_post_returns_generated_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![post_model(7, "Fiction")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let post = NewPost::new("Top 10 Facts", "x".repeat(260), "Fiction", None).unwrap();
        assert_eq!(repo.insert(post).await.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_update_missing_author_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresAuthorRepository::new(db);
        let changes = AuthorChanges {
            name: Some("Janet".into()),
            ..Default::default()
        };
        assert_eq!(repo.update(5, changes).await.unwrap_err(), RepoError::NotFound);
    }

    #[tokio::test]
    async fn test_update_post() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let changes = PostChanges {
            category: Some("Non-Fiction".into()),
            ..Default::default()
        };
        repo.update(1, changes).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let result = BaseRepository::<Post, i64>::delete(&repo, 9).await;
        assert_eq!(result.unwrap_err(), RepoError::NotFound);
    }
}
