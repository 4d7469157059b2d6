//! Apply the embedded schema migrations to the configured database.

use anyhow::Context;
use tracing::info;

use realty_infrastructure::{create_pool, run_migrations};
use realty_shared::config::AppConfig;
use realty_shared::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_telemetry();

    let config = AppConfig::load().context("failed to load configuration")?;
    info!("Running migrations for {} ({})", config.app.name, config.app.env);

    let pool = create_pool(&config.database)
        .await
        .context("failed to connect to database")?;
    run_migrations(&pool).await.context("failed to apply migrations")?;

    pool.close().await;
    Ok(())
}
