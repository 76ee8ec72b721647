//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Mixed threshold {0} exceeds maximum allowed ({1})")]
    MixedThresholdTooLarge(u32, u32),

    #[error("Invalid log filter: {0}")]
    InvalidLogLevel(String),

    #[error("Invalid report file name: {0}")]
    InvalidBaseFilename(String),

    #[error("Question bank file not found: {0}")]
    BankFileNotFound(PathBuf),
}
