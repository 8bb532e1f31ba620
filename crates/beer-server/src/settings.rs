//! Server configuration
//!
//! Built-in defaults, overridden by `BEER_*` environment variables
//! (e.g. `BEER_BIND_ADDRESS`, `BEER_STORAGE=sqlite`).

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;
use std::path::PathBuf;

pub const ENV_PREFIX: &str = "BEER";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    /// Backend name: `memory` or `sqlite`
    pub storage: String,
    pub database_path: PathBuf,
    pub seed_sample_data: bool,
    /// Fallback filter when `RUST_LOG` is not set
    pub log_level: String,
}

impl ServerConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_prefix(ENV_PREFIX)
    }

    pub fn load_with_prefix(prefix: &str) -> Result<Self> {
        Config::builder()
            .set_default("bind_address", "0.0.0.0:8080")?
            .set_default("storage", "memory")?
            .set_default("database_path", "data/beers.db")?
            .set_default("seed_sample_data", true)?
            .set_default("log_level", "info")?
            .add_source(Environment::with_prefix(prefix))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::load_with_prefix("BEER_TEST_DEFAULTS").unwrap();

        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.storage, "memory");
        assert_eq!(config.database_path, PathBuf::from("data/beers.db"));
        assert!(config.seed_sample_data);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_environment_overrides() {
        std::env::set_var("BEERTESTENV_STORAGE", "sqlite");
        std::env::set_var("BEERTESTENV_DATABASE_PATH", "/tmp/cellar.db");
        std::env::set_var("BEERTESTENV_SEED_SAMPLE_DATA", "false");

        let config = ServerConfig::load_with_prefix("BEERTESTENV").unwrap();

        assert_eq!(config.storage, "sqlite");
        assert_eq!(config.database_path, PathBuf::from("/tmp/cellar.db"));
        assert!(!config.seed_sample_data);
        assert_eq!(config.bind_address, "0.0.0.0:8080");
    }
}
