//! Expert source configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::ports::ExpertSource;

/// Where each expert's judgments are read from
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ExpertsConfig {
    /// Ordered judgment document paths, one per expert
    #[serde(default)]
    pub sources: Vec<PathBuf>,
}

impl ExpertsConfig {
    /// Expert sources named `expert_1`, `expert_2`, ... in configured order
    pub fn expert_sources(&self) -> Vec<ExpertSource> {
        ExpertSource::from_locations(&self.sources)
    }

    /// Validate expert configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sources.is_empty() {
            return Err(ValidationError::MissingRequired("experts.sources"));
        }
        if let Some(index) = self
            .sources
            .iter()
            .position(|path| path.as_os_str().is_empty())
        {
            return Err(ValidationError::EmptyExpertSource(index + 1));
        }
        Ok(())
    }
}
