//! Application configuration management.

use serde::Deserialize;

use crate::types::{Locale, Variant};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Formatting defaults.
    #[serde(default)]
    pub format: FormatConfig,
}

/// Formatting defaults applied when a caller does not choose explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct FormatConfig {
    /// Digit-grouping locale for full amounts.
    #[serde(default)]
    pub locale: Locale,
    /// Label spelling for scaled amounts.
    #[serde(default)]
    pub variant: Variant,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones:
    /// 1. `config/default.*`
    /// 2. `config/{RUN_MODE}.*` (`RUN_MODE` defaults to `development`)
    /// 3. `RAQAM__*` environment variables, e.g. `RAQAM__FORMAT__LOCALE=en-in`
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed or a value is invalid.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("RAQAM").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
