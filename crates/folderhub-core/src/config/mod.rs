//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Every field carries a serde default so the application
//! runs without a configuration file at all.

pub mod data;
pub mod logging;

use serde::{Deserialize, Serialize};

use self::data::DataConfig;
use self::logging::LoggingConfig;

use crate::error::FolderError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Folder data source settings.
    #[serde(default)]
    pub data: DataConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file merged with environment
    /// variables prefixed with `FOLDERHUB_`.
    ///
    /// The file is optional; when absent the defaults apply.
    pub fn load(path: &str) -> Result<Self, FolderError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("FOLDERHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
