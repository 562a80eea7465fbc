//! Application configuration module
//!
//! Configuration is layered: an optional `ahp-weights.{yaml,json,toml}` file in
//! the working directory, then environment variables with the `AHP_WEIGHTS`
//! prefix. Nested values use double underscores as separators and the expert
//! source list is comma separated.
//!
//! # Example
//!
//! ```no_run
//! use ahp_weights::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Writing weights to {}", config.output.path.display());
//! ```

mod error;
mod experts;
mod hierarchy;
mod logging;
mod output;

pub use error::{ConfigError, ValidationError};
pub use experts::ExpertsConfig;
pub use hierarchy::HierarchyConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use output::OutputConfig;

use serde::Deserialize;

use crate::domain::ahp::HierarchyWeightEngine;

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Expert judgment sources
    #[serde(default)]
    pub experts: ExpertsConfig,

    /// Matrix naming and consistency threshold
    #[serde(default)]
    pub hierarchy: HierarchyConfig,

    /// Result document location
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the optional config file and the environment
    ///
    /// # Environment Variable Format
    ///
    /// - `AHP_WEIGHTS__EXPERTS__SOURCES=a.yaml,b.yaml` -> `experts.sources = ["a.yaml", "b.yaml"]`
    /// - `AHP_WEIGHTS__HIERARCHY__CONSISTENCY_THRESHOLD=0.1` -> `hierarchy.consistency_threshold = 0.1`
    /// - `AHP_WEIGHTS__OUTPUT__PATH=out.yaml` -> `output.path = "out.yaml"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is malformed or values cannot be
    /// parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name("ahp-weights").required(false))
            .add_source(
                config::Environment::default()
                    .prefix("AHP_WEIGHTS")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("experts.sources"),
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
        self.experts.validate()?;
        self.hierarchy.validate()?;
        self.output.validate()?;
        Ok(())
    }

    /// Build the weight engine described by the hierarchy section
    pub fn weight_engine(&self) -> Result<HierarchyWeightEngine, ValidationError> {
        let naming = self.hierarchy.naming()?;
        Ok(HierarchyWeightEngine::new(naming)
            .with_consistency_threshold(self.hierarchy.consistency_threshold))
    }
}
