//! Configuration error types

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

    #[error("Expert source {0} has an empty path")]
    EmptyExpertSource(usize),

    #[error("Primary matrix identifier cannot be empty")]
    EmptyPrimaryMatrix,

    #[error("Secondary matrix template must contain {{indicator}}")]
    InvalidSecondaryTemplate,

    #[error("Consistency threshold must be a positive number")]
    InvalidConsistencyThreshold,

    #[error("Output path must end in .json, .yaml or .yml")]
    UnsupportedOutputFormat,
}
