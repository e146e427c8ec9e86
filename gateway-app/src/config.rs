//! Configuration loading from environment.

use std::env;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub bank_url: String,
    pub database_url: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let bank_url = env::var("ACQUIRING_BANK_URL")
            .map_err(|_| anyhow::anyhow!("ACQUIRING_BANK_URL environment variable is required"))?;

        // Absent means the in-memory payment store.
        let database_url = env::var("DATABASE_URL").ok();

        Ok(Self {
            port,
            bank_url,
            database_url,
        })
    }
}
