//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "database")]
use blog_infra::{SeaOrmPostRepository, connect};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state, connecting to the database when one is configured.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> anyhow::Result<Self> {
        #[cfg(feature = "database")]
        let posts: Arc<dyn PostRepository> = match db_config {
            Some(config) => {
                let conn = connect(config).await?;
                Arc::new(SeaOrmPostRepository::new(conn))
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryPostRepository::new())
            }
        };

        #[cfg(not(feature = "database"))]
        let posts: Arc<dyn PostRepository> = {
            if db_config.is_some() {
                tracing::warn!("Built without database feature - ignoring DATABASE_URL");
            }
            tracing::info!("Using in-memory post repository");
            Arc::new(InMemoryPostRepository::new())
        };

        tracing::info!("Application state initialized");

        Ok(Self::with_repository(posts))
    }

    /// State over an already-constructed store.
    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}
