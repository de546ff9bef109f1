use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;

use crate::config::AppConfig;

pub mod memory;
pub mod models;
pub mod repository;

/// Embedded migrations from the `migrations/` directory
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Errors from the project store
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Migration error: {0}")]
    MigrationError(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Open a connection pool against the configured database
pub async fn connect(config: &AppConfig) -> Result<PgPool, DatabaseError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))
}

/// Apply pending migrations
pub async fn migrate(pool: &PgPool) -> Result<(), DatabaseError> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))
}
