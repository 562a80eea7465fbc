//! Serialized shape of a persisted weight run.
//!
//! Three named sections mirror the logical result tables:
//! `primary_weights`, `secondary_weights` (one entry per primary indicator),
//! and `global_weights`.

use serde::{Deserialize, Serialize};

use crate::domain::ahp::{GlobalWeight, IndicatorWeight};
use crate::domain::foundation::{ExpertId, RunId, Timestamp};
use crate::ports::WeightRun;

/// Secondary weights under one primary indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondarySection {
    pub primary_indicator: String,
    pub weights: Vec<IndicatorWeight>,
}

/// Persisted form of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightsDocument {
    pub run_id: RunId,
    pub computed_at: Timestamp,
    pub experts: Vec<ExpertId>,
    pub primary_weights: Vec<IndicatorWeight>,
    pub secondary_weights: Vec<SecondarySection>,
    pub global_weights: Vec<GlobalWeight>,
}

impl From<&WeightRun> for WeightsDocument {
    fn from(run: &WeightRun) -> Self {
        let table = &run.table;
        Self {
            run_id: run.run_id,
            computed_at: run.computed_at,
            experts: table.experts().to_vec(),
            primary_weights: table.primary().weights().iter().cloned().collect(),
            secondary_weights: table
                .secondary_groups()
                .iter()
                .map(|group| SecondarySection {
                    primary_indicator: group.primary_indicator.clone(),
                    weights: group.group.weights().iter().cloned().collect(),
                })
                .collect(),
            global_weights: table.global_weights().to_vec(),
        }
    }
}
