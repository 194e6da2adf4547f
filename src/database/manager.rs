use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{StoreBackend, StoreConfig};
use crate::database::memory::MemoryNoteStore;
use crate::database::postgres::PgNoteStore;
use crate::database::store::NoteStore;

/// Errors from the note store backends
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Invalid database URL")]
    InvalidDatabaseUrl,

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

const CREATE_NOTES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS notes (
        id          UUID PRIMARY KEY,
        user_id     UUID NOT NULL,
        title       TEXT NOT NULL,
        description TEXT NOT NULL,
        tag         TEXT NOT NULL DEFAULT 'General',
        date        TIMESTAMPTZ NOT NULL DEFAULT now()
    )
"#;

const CREATE_NOTES_USER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS notes_user_id_idx ON notes (user_id)";

/// Builds the configured note store backend
pub struct DatabaseManager;

impl DatabaseManager {
    /// Open the store selected by `config.backend`
    pub async fn open_store(config: &StoreConfig) -> Result<Arc<dyn NoteStore>, DatabaseError> {
        match config.backend {
            StoreBackend::Memory => {
                warn!("Using in-memory note store; notes are lost on restart");
                Ok(Arc::new(MemoryNoteStore::new()))
            }
            StoreBackend::Postgres => {
                let pool = Self::connect(config).await?;
                Self::ensure_schema(&pool).await?;
                Ok(Arc::new(PgNoteStore::new(pool)))
            }
        }
    }

    /// Create a connection pool from `DATABASE_URL`
    pub async fn connect(config: &StoreConfig) -> Result<PgPool, DatabaseError> {
        let connection_string = Self::connection_string(config)?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect(&connection_string)
            .await?;

        info!("Created database pool (max {} connections)", config.max_connections);
        Ok(pool)
    }

    fn connection_string(config: &StoreConfig) -> Result<String, DatabaseError> {
        let base = config
            .database_url
            .as_deref()
            .ok_or(DatabaseError::ConfigMissing("DATABASE_URL"))?;

        let url = url::Url::parse(base).map_err(|_| DatabaseError::InvalidDatabaseUrl)?;
        match url.scheme() {
            "postgres" | "postgresql" => Ok(url.into()),
            _ => Err(DatabaseError::InvalidDatabaseUrl),
        }
    }

    /// Create the `notes` table and owner index when missing
    pub async fn ensure_schema(pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::query(CREATE_NOTES_TABLE).execute(pool).await?;
        sqlx::query(CREATE_NOTES_USER_INDEX).execute(pool).await?;
        info!("Notes schema ready");
        Ok(())
    }
}
