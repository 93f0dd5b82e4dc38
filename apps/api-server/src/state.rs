//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::PostService;
use blog_infra::DatabaseConfig;

#[cfg(feature = "postgres")]
use anyhow::Context;
#[cfg(feature = "postgres")]
use blog_infra::{DatabaseConnections, PostgresPostRepository};

/// Shared application state. Cloned into every actix worker.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    /// Name of the active storage backend, reported by the health check.
    pub store: &'static str,
}

impl AppState {
    /// Build the application state for the compiled-in storage backend.
    ///
    /// With the `postgres` feature a database is mandatory: a missing URL or
    /// an unreachable server is an error.
    #[cfg(feature = "postgres")]
    pub async fn init(db_config: Option<&DatabaseConfig>) -> anyhow::Result<Self> {
        let config = db_config.context("DATABASE_URL must be set")?;

        let connections = DatabaseConnections::init(config)
            .await
            .context("failed to connect to the database")?;

        let repo = Arc::new(PostgresPostRepository::new(connections.main));

        tracing::info!("Application state initialized");

        Ok(Self {
            posts: PostService::new(repo),
            store: "postgres",
        })
    }

    #[cfg(not(feature = "postgres"))]
    pub async fn init(db_config: Option<&DatabaseConfig>) -> anyhow::Result<Self> {
        if db_config.is_some() {
            tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
        }
        tracing::info!("Running without postgres feature - using in-memory repository");

        Ok(Self::in_memory())
    }

    /// State backed by an empty in-memory store.
    #[cfg(any(test, not(feature = "postgres")))]
    pub fn in_memory() -> Self {
        Self {
            posts: PostService::new(Arc::new(blog_infra::InMemoryPostRepository::new())),
            store: "memory",
        }
    }
}
