//! Hierarchy configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ahp::{MatrixNaming, DEFAULT_CONSISTENCY_THRESHOLD};
use crate::domain::foundation;

/// Matrix naming convention and consistency reporting
#[derive(Debug, Clone, Deserialize)]
pub struct HierarchyConfig {
    /// Identifier of the primary comparison matrix
    #[serde(default = "default_primary_matrix")]
    pub primary_matrix: String,

    /// Secondary matrix identifier, with `{indicator}` replaced by the primary indicator
    #[serde(default = "default_secondary_template")]
    pub secondary_matrix_template: String,

    /// CR above which a warning is logged (never blocks a run)
    #[serde(default = "default_consistency_threshold")]
    pub consistency_threshold: f64,
}

impl HierarchyConfig {
    /// Build the matrix naming convention
    pub fn naming(&self) -> Result<MatrixNaming, ValidationError> {
        MatrixNaming::new(&self.primary_matrix, &self.secondary_matrix_template).map_err(
            |e| match e {
                foundation::ValidationError::EmptyField { .. } => {
                    ValidationError::EmptyPrimaryMatrix
                }
                foundation::ValidationError::InvalidFormat { .. } => {
                    ValidationError::InvalidSecondaryTemplate
                }
            },
        )
    }

    /// Validate hierarchy configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.naming()?;
        if !self.consistency_threshold.is_finite() || self.consistency_threshold <= 0.0 {
            return Err(ValidationError::InvalidConsistencyThreshold);
        }
        Ok(())
    }
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            primary_matrix: default_primary_matrix(),
            secondary_matrix_template: default_secondary_template(),
            consistency_threshold: default_consistency_threshold(),
        }
    }
}

fn default_primary_matrix() -> String {
    MatrixNaming::DEFAULT_PRIMARY_MATRIX.to_string()
}

fn default_secondary_template() -> String {
    MatrixNaming::DEFAULT_SECONDARY_TEMPLATE.to_string()
}

fn default_consistency_threshold() -> f64 {
    DEFAULT_CONSISTENCY_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hierarchy_config_defaults() {
        let config = HierarchyConfig::default();
        assert_eq!(config.primary_matrix, "primary indicators");
        assert_eq!(config.secondary_matrix_template, "{indicator} secondary indicators");
        assert_eq!(config.consistency_threshold, 0.10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_template_without_placeholder_rejected() {
        let config = HierarchyConfig {
            secondary_matrix_template: "secondary".to_string(),
            ..HierarchyConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidSecondaryTemplate)
        ));
    }

    #[test]
    fn test_blank_primary_matrix_rejected() {
        let config = HierarchyConfig {
            primary_matrix: " ".to_string(),
            ..HierarchyConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::EmptyPrimaryMatrix)
        ));
    }

    #[test]
    fn test_non_positive_threshold_rejected() {
        let config = HierarchyConfig {
            consistency_threshold: 0.0,
            ..HierarchyConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidConsistencyThreshold)
        ));
    }

    #[test]
    fn test_naming_uses_template() {
        let config = HierarchyConfig {
            primary_matrix: "一级指标判断矩阵".to_string(),
            secondary_matrix_template: "{indicator}二级指标判断矩阵".to_string(),
            ..HierarchyConfig::default()
        };
        let naming = config.naming().unwrap();
        assert_eq!(naming.primary_matrix().as_str(), "一级指标判断矩阵");
        assert_eq!(naming.secondary_matrix("质量").as_str(), "质量二级指标判断矩阵");
    }
}
