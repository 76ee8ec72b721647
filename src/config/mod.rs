//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `COMMUNICATION_STYLES` prefix and nested values use double underscores as
//! separators. Every value has a default, so an empty environment is valid.
//!
//! # Example
//!
//! ```no_run
//! use communication_styles::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reports go to {}", config.export.output_dir.display());
//! ```

mod error;
mod export;
mod logging;
mod questionnaire;
mod scoring;

pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use logging::LoggingConfig;
pub use questionnaire::QuestionnaireConfig;
pub use scoring::{ScoringConfig, MAX_MIXED_THRESHOLD};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Scoring and interpretation policies
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Question bank source
    #[serde(default)]
    pub questionnaire: QuestionnaireConfig,

    /// Report export destination and format
    #[serde(default)]
    pub export: ExportConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `COMMUNICATION_STYLES` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `COMMUNICATION_STYLES__SCORING__MIXED_THRESHOLD=4` -> `scoring.mixed_threshold = 4`
    /// - `COMMUNICATION_STYLES__EXPORT__FORMAT=json` -> `export.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("COMMUNICATION_STYLES")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.scoring.validate()?;
        self.questionnaire.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
