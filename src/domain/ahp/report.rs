//! Plain-text rendering of a weight table for console diagnostics.

use std::fmt;

use super::{GroupWeights, HierarchicalWeightTable};

/// Human-readable report of every level's weights and consistency ratio.
///
/// Weights are printed to four decimals. The report is diagnostic output,
/// separate from what result sinks persist.
pub struct WeightReport<'a> {
    table: &'a HierarchicalWeightTable,
}

impl<'a> WeightReport<'a> {
    /// Creates a report over a computed table.
    pub fn new(table: &'a HierarchicalWeightTable) -> Self {
        Self { table }
    }

    fn write_group(f: &mut fmt::Formatter<'_>, group: &GroupWeights) -> fmt::Result {
        for entry in group.weights().iter() {
            writeln!(f, "{}: {:.4}", entry.indicator, entry.weight)?;
        }
        Ok(())
    }
}

impl fmt::Display for WeightReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let primary = self.table.primary();
        writeln!(f, "Primary indicator weights:")?;
        Self::write_group(f, primary)?;
        writeln!(f, "Primary consistency ratio CR: {}", primary.consistency_ratio())?;

        for secondary in self.table.secondary_groups() {
            writeln!(f)?;
            writeln!(f, "{} secondary indicator weights:", secondary.primary_indicator)?;
            Self::write_group(f, &secondary.group)?;
            writeln!(
                f,
                "{} secondary consistency ratio CR: {}",
                secondary.primary_indicator,
                secondary.group.consistency_ratio()
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Global weights:")?;
        for global in self.table.global_weights() {
            writeln!(f, "{} - {}: {:.4}", global.primary, global.secondary, global.weight)?;
        }
        Ok(())
    }
}

impl HierarchicalWeightTable {
    /// Returns a printable diagnostic report of this table.
    pub fn report(&self) -> WeightReport<'_> {
        WeightReport::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::{
        ConsistencyRatio, MatrixId, PriorityResult, SecondaryGroup, WeightVector,
    };

    fn group(labels: &[&str], weights: &[f64], cr: f64) -> GroupWeights {
        let labels: Vec<String> = labels.iter().map(|s| s.to_string()).collect();
        GroupWeights::new(
            MatrixId::from("m"),
            PriorityResult {
                weights: WeightVector::from_pairs(&labels, weights),
                lambda_max: 0.0,
                consistency_index: 0.0,
                consistency_ratio: ConsistencyRatio::new(cr),
            },
        )
    }

    #[test]
    fn report_lists_every_level() {
        let table = HierarchicalWeightTable::new(
            group(&["A", "B"], &[0.75, 0.25], 0.0),
            vec![
                SecondaryGroup {
                    primary_indicator: "A".into(),
                    primary_weight: 0.75,
                    group: group(&["A1"], &[1.0], 0.0),
                },
                SecondaryGroup {
                    primary_indicator: "B".into(),
                    primary_weight: 0.25,
                    group: group(&["B1", "B2", "B3"], &[0.5, 0.3, 0.2], 0.0521),
                },
            ],
            vec![],
        );

        let text = table.report().to_string();

        assert!(text.contains("Primary indicator weights:\nA: 0.7500\nB: 0.2500\n"));
        assert!(text.contains("Primary consistency ratio CR: 0.0000"));
        assert!(text.contains("B secondary consistency ratio CR: 0.0521"));
        assert!(text.contains("A - A1: 0.7500"));
        assert!(text.contains("B - B3: 0.0500"));
    }
}
