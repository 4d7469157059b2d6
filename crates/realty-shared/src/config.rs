//! Configuration management

use std::collections::HashMap;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_ACQUIRE_TIMEOUT_SECS, DEFAULT_APP_NAME, DEFAULT_MAX_CONNECTIONS,
    DEFAULT_MIN_CONNECTIONS,
};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    /// Role name to permitted operation names. Empty means the built-in policy.
    #[serde(default)]
    pub permissions: HashMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl DatabaseSettings {
    fn check(&self) -> Result<(), AppError> {
        if self.url.trim().is_empty() {
            return Err(AppError::InvalidSetting("database.url must not be empty".into()));
        }
        if self.max_connections == 0 || self.min_connections > self.max_connections {
            return Err(AppError::InvalidSetting(format!(
                "database pool bounds {}..{} are invalid",
                self.min_connections, self.max_connections
            )));
        }
        Ok(())
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config: Self = Self::builder(&env)?.build()?.try_deserialize()?;
        config.database.check()?;
        Ok(config)
    }

    fn builder(
        env: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("app.env", env)?
            .set_default("app.name", DEFAULT_APP_NAME)?
            .set_default("database.max_connections", DEFAULT_MAX_CONNECTIONS)?
            .set_default("database.min_connections", DEFAULT_MIN_CONNECTIONS)?
            .set_default("database.acquire_timeout_secs", DEFAULT_ACQUIRE_TIMEOUT_SECS)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("REALTY")
                    .separator("__")
                    .try_parsing(true),
            ))
    }
}
