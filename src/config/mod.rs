//! Configuration module for the rating service

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Main application settings
///
/// A missing required value fails `load()` at startup; carriers never reach
/// into the environment at request time.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub ups: UpsSettings,
}

/// UPS integration configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UpsSettings {
    /// OAuth client id
    pub client_id: String,

    /// OAuth client secret
    pub client_secret: String,

    /// OAuth token endpoint
    pub oauth_url: String,

    /// Rating endpoint
    pub rate_url: String,
}

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration priority (highest to lowest):
    /// 1. Environment variables (prefixed with SHIPRATE_)
    /// 2. config/local.toml (gitignored)
    /// 3. config/default.toml
    pub fn load() -> Result<Self, ConfigError> {
        let config_dir = std::env::var("CONFIG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config"));

        let builder = Config::builder()
            // Start with default configuration
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Add local overrides (gitignored)
            .add_source(File::from(config_dir.join("local.toml")).required(false))
            // Add environment variables (SHIPRATE_UPS__CLIENT_ID, etc.)
            .add_source(
                Environment::with_prefix("SHIPRATE")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}
