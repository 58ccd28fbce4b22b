//! Application state - shared across all handlers.

use std::sync::Arc;

use guestbook_core::Guestbook;
use guestbook_infra::InMemoryPostRepository;

use crate::config::DatabaseSettings;

/// Which backend the guestbook is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    Memory,
    Sqlite,
}

impl Storage {
    pub fn as_str(self) -> &'static str {
        match self {
            Storage::Memory => "memory",
            Storage::Sqlite => "sqlite",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub guestbook: Guestbook,
    pub storage: Storage,
}

impl AppState {
    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self {
            guestbook: Guestbook::new(Arc::new(InMemoryPostRepository::new())),
            storage: Storage::Memory,
        }
    }

    /// Build the application state with appropriate implementations.
    ///
    /// A configured database that cannot be reached is a startup error.
    pub async fn new(db_settings: Option<&DatabaseSettings>) -> anyhow::Result<Self> {
        let state = match db_settings {
            Some(settings) => Self::sqlite(settings).await?,
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        tracing::info!(storage = state.storage.as_str(), "Application state initialized");
        Ok(state)
    }

    #[cfg(feature = "sqlite")]
    async fn sqlite(settings: &DatabaseSettings) -> anyhow::Result<Self> {
        use anyhow::Context;
        use guestbook_infra::{DatabaseConfig, SqliteDatabase, SqlitePostRepository};

        let config = DatabaseConfig {
            url: settings.url.clone(),
            max_connections: settings.max_connections,
            min_connections: settings.min_connections,
        };

        let db = SqliteDatabase::init(&config)
            .await
            .context("failed to initialize the guestbook database")?;

        Ok(Self {
            guestbook: Guestbook::new(Arc::new(SqlitePostRepository::new(db.main))),
            storage: Storage::Sqlite,
        })
    }

    #[cfg(not(feature = "sqlite"))]
    async fn sqlite(_settings: &DatabaseSettings) -> anyhow::Result<Self> {
        anyhow::bail!("DATABASE_URL is set but this build has no sqlite support")
    }
}
