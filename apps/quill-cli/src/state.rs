//! Application state - the services wired to a storage backend.

use std::sync::Arc;

use quill_core::ports::{AuthorRepository, PostRepository};
use quill_core::service::{AuthorService, PostService};
use quill_infra::{DatabaseConfig, InMemoryAuthorRepository, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use quill_infra::{PostgresAuthorRepository, PostgresPostRepository, database};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub authors: AuthorService,
    pub posts: PostService,
}

impl AppState {
    /// Build the services over postgres when configured, in-memory otherwise.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> anyhow::Result<Self> {
        let (author_repo, post_repo) = Self::repositories(db_config).await?;

        tracing::debug!("Application state initialized");

        Ok(Self {
            authors: AuthorService::new(author_repo),
            posts: PostService::new(post_repo),
        })
    }

    #[cfg(feature = "postgres")]
    async fn repositories(
        db_config: Option<&DatabaseConfig>,
    ) -> anyhow::Result<(Arc<dyn AuthorRepository>, Arc<dyn PostRepository>)> {
        match db_config {
            Some(config) => {
                let conn = database::connect(config).await?;
                Ok((
                    Arc::new(PostgresAuthorRepository::new(conn.clone())),
                    Arc::new(PostgresPostRepository::new(conn)),
                ))
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Ok(Self::in_memory())
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn repositories(
        _db_config: Option<&DatabaseConfig>,
    ) -> anyhow::Result<(Arc<dyn AuthorRepository>, Arc<dyn PostRepository>)> {
        tracing::info!("Running without postgres feature - using in-memory repositories");
        Ok(Self::in_memory())
    }

    fn in_memory() -> (Arc<dyn AuthorRepository>, Arc<dyn PostRepository>) {
        (
            Arc::new(InMemoryAuthorRepository::new()),
            Arc::new(InMemoryPostRepository::new()),
        )
    }
}
