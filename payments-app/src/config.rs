//! Configuration loading from environment.

use std::env;

use payments_repo::DatabaseSettings;
use payments_repo::settings::DEFAULT_DB_PORT;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub database: DatabaseSettings,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(p) => p
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid PORT {:?}: {}", p, e))?,
            None => 3000,
        };

        let db_port = match var("DB_PORT") {
            Some(p) => p
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid DB_PORT {:?}: {}", p, e))?,
            None => DEFAULT_DB_PORT,
        };

        let database = DatabaseSettings {
            url: var("DATABASE_URL"),
            host: var("DB_HOST"),
            port: db_port,
            name: var("DB_NAME"),
            user: var("DB_USER"),
            password: var("DB_PASSWORD"),
        };

        Ok(Self { port, database })
    }
}
