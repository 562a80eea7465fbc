//! Output configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::adapters::DocumentFormat;

/// Where weight results are written
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Result document path; the extension selects JSON or YAML
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl OutputConfig {
    /// Validate output configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if DocumentFormat::from_path(&self.path).is_none() {
            return Err(ValidationError::UnsupportedOutputFormat);
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("weights_result.json")
}
