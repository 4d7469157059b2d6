//! Database connection pool and schema migrations

use std::time::Duration;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;
use tracing::info;

use realty_shared::config::DatabaseSettings;

/// Schema for every entity table, embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Connection error: {0}")]
    Connection(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] MigrateError),
}

pub async fn create_pool(settings: &DatabaseSettings) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect(&settings.url)
        .await?;
    info!("Connected to PostgreSQL (max {} connections)", settings.max_connections);
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), DatabaseError> {
    MIGRATOR.run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}
