//! Hierarchical Weight Table - Final artifact of one weight computation.

use serde::{Deserialize, Serialize};

use super::{ConsistencyRatio, MatrixId, PriorityResult, WeightVector};
use crate::domain::foundation::ExpertId;

/// Weights computed for one comparison group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupWeights {
    pub matrix_id: MatrixId,
    pub priority: PriorityResult,
}

impl GroupWeights {
    /// Creates group weights from a priority result.
    pub fn new(matrix_id: MatrixId, priority: PriorityResult) -> Self {
        Self {
            matrix_id,
            priority,
        }
    }

    /// The local weights of the group.
    pub fn weights(&self) -> &WeightVector {
        &self.priority.weights
    }

    /// The group's consistency ratio.
    pub fn consistency_ratio(&self) -> ConsistencyRatio {
        self.priority.consistency_ratio
    }
}

/// Secondary weights nested under one primary indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryGroup {
    pub primary_indicator: String,
    pub primary_weight: f64,
    pub group: GroupWeights,
}

/// Product of a primary weight and one of its secondary weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalWeight {
    pub primary: String,
    pub secondary: String,
    pub weight: f64,
}

/// Primary, secondary, and flattened global weights of a two-level hierarchy.
///
/// Secondary groups and global weights follow the order of the primary
/// weight vector, and within a group the order of its secondary labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchicalWeightTable {
    primary: GroupWeights,
    secondary: Vec<SecondaryGroup>,
    global: Vec<GlobalWeight>,
    experts: Vec<ExpertId>,
}

impl HierarchicalWeightTable {
    /// Assembles the table, deriving every global weight as
    /// `primary_weight * secondary_weight`. No renormalization is applied.
    pub fn new(primary: GroupWeights, secondary: Vec<SecondaryGroup>, experts: Vec<ExpertId>) -> Self {
        let global = secondary
            .iter()
            .flat_map(|group| {
                group.group.weights().iter().map(move |entry| GlobalWeight {
                    primary: group.primary_indicator.clone(),
                    secondary: entry.indicator.clone(),
                    weight: group.primary_weight * entry.weight,
                })
            })
            .collect();

        Self {
            primary,
            secondary,
            global,
            experts,
        }
    }

    /// Primary-level weights and diagnostics.
    pub fn primary(&self) -> &GroupWeights {
        &self.primary
    }

    /// Secondary groups in primary order.
    pub fn secondary_groups(&self) -> &[SecondaryGroup] {
        &self.secondary
    }

    /// Secondary weights under a named primary indicator.
    pub fn secondary_for(&self, primary_indicator: &str) -> Option<&GroupWeights> {
        self.secondary
            .iter()
            .find(|group| group.primary_indicator == primary_indicator)
            .map(|group| &group.group)
    }

    /// Flattened global weights.
    pub fn global_weights(&self) -> &[GlobalWeight] {
        &self.global
    }

    /// Global weight of a (primary, secondary) pair.
    pub fn global_weight(&self, primary: &str, secondary: &str) -> Option<f64> {
        self.global
            .iter()
            .find(|entry| entry.primary == primary && entry.secondary == secondary)
            .map(|entry| entry.weight)
    }

    /// Sum of all global weights (1.0 for a complete table).
    pub fn total_global_weight(&self) -> f64 {
        self.global.iter().map(|entry| entry.weight).sum()
    }

    /// Experts whose judgments were aggregated.
    pub fn experts(&self) -> &[ExpertId] {
        &self.experts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn group(matrix: &str, labels: &[&str], weights: &[f64]) -> GroupWeights {
        let labels: Vec<String> = labels.iter().map(|s| s.to_string()).collect();
        GroupWeights::new(
            MatrixId::from(matrix),
            PriorityResult {
                weights: WeightVector::from_pairs(&labels, weights),
                lambda_max: labels.len() as f64,
                consistency_index: 0.0,
                consistency_ratio: ConsistencyRatio::ZERO,
            },
        )
    }

    fn table() -> HierarchicalWeightTable {
        HierarchicalWeightTable::new(
            group("primary", &["A", "B"], &[0.6, 0.4]),
            vec![
                SecondaryGroup {
                    primary_indicator: "A".into(),
                    primary_weight: 0.6,
                    group: group("A secondary", &["A1", "A2"], &[0.5, 0.5]),
                },
                SecondaryGroup {
                    primary_indicator: "B".into(),
                    primary_weight: 0.4,
                    group: group("B secondary", &["B1"], &[1.0]),
                },
            ],
            vec![ExpertId::positional(1)],
        )
    }

    #[test]
    fn global_weights_are_products() {
        let table = table();

        assert_relative_eq!(table.global_weight("A", "A1").unwrap(), 0.3);
        assert_relative_eq!(table.global_weight("A", "A2").unwrap(), 0.3);
        assert_relative_eq!(table.global_weight("B", "B1").unwrap(), 0.4);
        assert!(table.global_weight("B", "A1").is_none());
    }

    #[test]
    fn global_weights_follow_hierarchy_order() {
        let table = table();
        let pairs: Vec<(&str, &str)> = table
            .global_weights()
            .iter()
            .map(|g| (g.primary.as_str(), g.secondary.as_str()))
            .collect();

        assert_eq!(pairs, vec![("A", "A1"), ("A", "A2"), ("B", "B1")]);
    }

    #[test]
    fn total_global_weight_is_one() {
        assert_relative_eq!(table().total_global_weight(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn secondary_lookup_by_primary_name() {
        let table = table();
        assert_eq!(table.secondary_for("B").unwrap().weights().get("B1"), Some(1.0));
        assert!(table.secondary_for("C").is_none());
    }
}
