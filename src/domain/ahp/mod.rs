//! AHP Module - Pure domain services for Analytic Hierarchy Process weights.
//!
//! # Components
//!
//! - `JudgmentMatrix` / `ExpertJudgmentSet` - Labelled comparison matrices per expert
//! - `MatrixAggregator` - Element-wise consensus of one matrix across experts
//! - `PriorityComputer` - Principal-eigenvector weights, CI and CR
//! - `HierarchyWeightEngine` - Primary, secondary, and global weights
//! - `HierarchicalWeightTable` - The computed artifact handed to result sinks
//!
//! All computation here is synchronous and free of I/O. Loading judgments and
//! persisting results happen behind ports.

mod aggregator;
mod errors;
mod hierarchy;
mod judgment_matrix;
mod priority;
mod report;
mod weight_table;

pub use aggregator::{ConsensusMatrix, MatrixAggregator};
pub use errors::{AhpError, MatrixError};
pub use hierarchy::{HierarchyWeightEngine, IndicatorGroup, MatrixNaming};
pub use judgment_matrix::{ExpertJudgmentSet, JudgmentMatrix, MatrixId, MatrixShape};
pub use priority::{
    random_index, ConsistencyRatio, IndicatorWeight, PriorityComputer, PriorityResult,
    WeightVector, DEFAULT_CONSISTENCY_THRESHOLD, MAX_MATRIX_SIZE, RANDOM_INDEX,
};
pub use report::WeightReport;
pub use weight_table::{GlobalWeight, GroupWeights, HierarchicalWeightTable, SecondaryGroup};
