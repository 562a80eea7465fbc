//! Hierarchy Weight Engine - Two-level AHP over expert judgment sets.
//!
//! The hierarchy is a root group (the primary indicators) whose computed
//! labels determine one child group per primary indicator. Which matrix a
//! group reads is decided by a [`MatrixNaming`] convention, so the traversal
//! does not depend on how matrices happen to be named in the source data.

use tracing::{info, warn};

use super::{
    AhpError, ExpertJudgmentSet, GroupWeights, HierarchicalWeightTable, MatrixAggregator,
    MatrixId, PriorityComputer, SecondaryGroup, DEFAULT_CONSISTENCY_THRESHOLD,
};
use crate::domain::foundation::ValidationError;

/// Maps indicator groups to the matrix identifiers experts supply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixNaming {
    primary_matrix: MatrixId,
    secondary_template: String,
}

impl MatrixNaming {
    /// Placeholder replaced by the primary indicator name.
    pub const INDICATOR_PLACEHOLDER: &'static str = "{indicator}";

    /// Default identifier of the primary comparison matrix.
    pub const DEFAULT_PRIMARY_MATRIX: &'static str = "primary indicators";

    /// Default template for secondary comparison matrices.
    pub const DEFAULT_SECONDARY_TEMPLATE: &'static str = "{indicator} secondary indicators";

    /// Creates a naming convention.
    ///
    /// # Errors
    /// - `EmptyField` if the primary matrix id is blank
    /// - `InvalidFormat` if the template lacks `{indicator}`
    pub fn new(
        primary_matrix: impl Into<String>,
        secondary_template: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let primary_matrix = primary_matrix.into();
        let secondary_template = secondary_template.into();

        if primary_matrix.trim().is_empty() {
            return Err(ValidationError::empty_field("primary_matrix"));
        }
        if !secondary_template.contains(Self::INDICATOR_PLACEHOLDER) {
            return Err(ValidationError::invalid_format(
                "secondary_matrix_template",
                format!("must contain {}", Self::INDICATOR_PLACEHOLDER),
            ));
        }

        Ok(Self {
            primary_matrix: MatrixId::new(primary_matrix),
            secondary_template,
        })
    }

    /// Identifier of the primary comparison matrix.
    pub fn primary_matrix(&self) -> &MatrixId {
        &self.primary_matrix
    }

    /// Identifier of the secondary matrix nested under `indicator`.
    pub fn secondary_matrix(&self, indicator: &str) -> MatrixId {
        MatrixId::new(
            self.secondary_template
                .replace(Self::INDICATOR_PLACEHOLDER, indicator),
        )
    }
}

impl Default for MatrixNaming {
    fn default() -> Self {
        Self {
            primary_matrix: MatrixId::from(Self::DEFAULT_PRIMARY_MATRIX),
            secondary_template: Self::DEFAULT_SECONDARY_TEMPLATE.to_string(),
        }
    }
}

/// One comparison group of the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorGroup {
    /// Primary indicator this group refines; `None` for the root group.
    pub parent: Option<String>,
    pub matrix_id: MatrixId,
}

impl IndicatorGroup {
    /// The root group comparing primary indicators.
    pub fn root(matrix_id: MatrixId) -> Self {
        Self {
            parent: None,
            matrix_id,
        }
    }

    /// A group refining `parent`.
    pub fn child(parent: impl Into<String>, matrix_id: MatrixId) -> Self {
        Self {
            parent: Some(parent.into()),
            matrix_id,
        }
    }

    fn level(&self) -> &'static str {
        if self.parent.is_some() {
            "secondary"
        } else {
            "primary"
        }
    }
}

/// Computes primary, secondary, and global weights from expert judgments.
#[derive(Debug, Clone)]
pub struct HierarchyWeightEngine {
    naming: MatrixNaming,
    consistency_threshold: f64,
}

impl HierarchyWeightEngine {
    /// Creates an engine with the given naming convention.
    pub fn new(naming: MatrixNaming) -> Self {
        Self {
            naming,
            consistency_threshold: DEFAULT_CONSISTENCY_THRESHOLD,
        }
    }

    /// Sets the CR above which a warning is logged. Never blocks the run.
    pub fn with_consistency_threshold(mut self, threshold: f64) -> Self {
        self.consistency_threshold = threshold;
        self
    }

    /// The naming convention in use.
    pub fn naming(&self) -> &MatrixNaming {
        &self.naming
    }

    /// Runs the full two-level computation.
    ///
    /// # Algorithm
    /// 1. Aggregate and weigh the primary matrix; its labels, in order, are
    ///    the primary indicators for the rest of the run
    /// 2. For each primary indicator, aggregate and weigh its secondary matrix
    /// 3. Global weight = primary weight x secondary weight
    ///
    /// # Errors
    /// Any aggregation or priority failure aborts the run; no partial table
    /// is returned.
    pub fn compute_hierarchy(
        &self,
        expert_sets: &[ExpertJudgmentSet],
    ) -> Result<HierarchicalWeightTable, AhpError> {
        let root = IndicatorGroup::root(self.naming.primary_matrix().clone());
        let primary = self.evaluate_group(expert_sets, &root)?;

        let mut secondary = Vec::with_capacity(primary.weights().len());
        for (entry, group) in primary
            .weights()
            .iter()
            .zip(self.secondary_groups(&primary))
        {
            let weights = self.evaluate_group(expert_sets, &group)?;
            secondary.push(SecondaryGroup {
                primary_indicator: entry.indicator.clone(),
                primary_weight: entry.weight,
                group: weights,
            });
        }

        let experts = expert_sets
            .iter()
            .map(|set| set.expert_id().clone())
            .collect();
        let table = HierarchicalWeightTable::new(primary, secondary, experts);

        info!(
            global_count = table.global_weights().len(),
            total = table.total_global_weight(),
            "Computed global weights"
        );

        Ok(table)
    }

    /// Child groups derived from the primary weight labels.
    pub fn secondary_groups(&self, primary: &GroupWeights) -> Vec<IndicatorGroup> {
        primary
            .weights()
            .indicators()
            .map(|indicator| {
                IndicatorGroup::child(indicator, self.naming.secondary_matrix(indicator))
            })
            .collect()
    }

    fn evaluate_group(
        &self,
        expert_sets: &[ExpertJudgmentSet],
        group: &IndicatorGroup,
    ) -> Result<GroupWeights, AhpError> {
        let consensus = MatrixAggregator::aggregate(expert_sets, &group.matrix_id)?;
        let priority = PriorityComputer::compute_weights(&consensus)?;

        for entry in priority.weights.iter() {
            info!(
                level = group.level(),
                matrix_id = %group.matrix_id,
                indicator = %entry.indicator,
                weight = entry.weight,
                "Indicator weight"
            );
        }
        info!(
            level = group.level(),
            matrix_id = %group.matrix_id,
            lambda_max = priority.lambda_max,
            consistency_ratio = %priority.consistency_ratio,
            "Consistency ratio"
        );

        if !priority
            .consistency_ratio
            .is_acceptable(self.consistency_threshold)
        {
            warn!(
                matrix_id = %group.matrix_id,
                consistency_ratio = %priority.consistency_ratio,
                threshold = self.consistency_threshold,
                "Consistency ratio exceeds threshold; weights are still used"
            );
        }

        Ok(GroupWeights::new(group.matrix_id.clone(), priority))
    }
}

impl Default for HierarchyWeightEngine {
    fn default() -> Self {
        Self::new(MatrixNaming::default())
    }
}
