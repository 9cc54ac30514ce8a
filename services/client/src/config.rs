//! services/client/src/config.rs
//!
//! Defines the client host's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_level: Level,
    /// Simulated one-shot catalog-fetch latency before the store reports
    /// itself loaded.
    pub load_delay: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let data_dir = std::env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let load_delay_str =
            std::env::var("CATALOG_LOAD_DELAY_MS").unwrap_or_else(|_| "1000".to_string());
        let load_delay_ms = load_delay_str.parse::<u64>().map_err(|_| {
            ConfigError::InvalidValue(
                "CATALOG_LOAD_DELAY_MS".to_string(),
                format!("'{}' is not a number of milliseconds", load_delay_str),
            )
        })?;

        Ok(Self {
            data_dir,
            log_level,
            load_delay: Duration::from_millis(load_delay_ms),
        })
    }
}
