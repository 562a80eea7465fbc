//! Matrix Aggregator - Consensus of one named matrix across experts.

use tracing::debug;

use super::{AhpError, ExpertJudgmentSet, JudgmentMatrix, MatrixId};

/// Element-wise mean of the same-named matrix across all experts.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsensusMatrix {
    matrix_id: MatrixId,
    matrix: JudgmentMatrix,
    expert_count: usize,
}

impl ConsensusMatrix {
    /// Wraps a matrix as the consensus of `expert_count` experts.
    pub fn new(matrix_id: MatrixId, matrix: JudgmentMatrix, expert_count: usize) -> Self {
        Self {
            matrix_id,
            matrix,
            expert_count,
        }
    }

    /// The identifier the consensus was built for.
    pub fn matrix_id(&self) -> &MatrixId {
        &self.matrix_id
    }

    /// The averaged matrix.
    pub fn matrix(&self) -> &JudgmentMatrix {
        &self.matrix
    }

    /// Number of experts averaged.
    pub fn expert_count(&self) -> usize {
        self.expert_count
    }
}

/// Consensus building across expert judgment sets.
pub struct MatrixAggregator;

impl MatrixAggregator {
    /// Averages `matrix_id` over every supplied expert.
    ///
    /// # Errors
    /// - `NoExperts` if `expert_sets` is empty
    /// - `MissingMatrix` naming the first expert lacking the matrix
    /// - `ShapeMismatch` if any expert's labels differ from the first expert's
    ///
    /// Experts are matched by label order rather than position alone, so a
    /// reordered matrix is rejected instead of averaged into the wrong cells.
    pub fn aggregate(
        expert_sets: &[ExpertJudgmentSet],
        matrix_id: &MatrixId,
    ) -> Result<ConsensusMatrix, AhpError> {
        let (first_set, rest) = expert_sets.split_first().ok_or_else(|| AhpError::NoExperts {
            matrix_id: matrix_id.clone(),
        })?;

        let reference = first_set
            .get(matrix_id)
            .ok_or_else(|| AhpError::missing_matrix(0, first_set.expert_id(), matrix_id))?;

        let mut sum = reference.as_matrix().clone();

        for (offset, set) in rest.iter().enumerate() {
            let matrix = set
                .get(matrix_id)
                .ok_or_else(|| AhpError::missing_matrix(offset + 1, set.expert_id(), matrix_id))?;

            if !matrix.same_shape(reference) {
                return Err(AhpError::shape_mismatch(
                    matrix_id,
                    set.expert_id(),
                    reference.shape(),
                    matrix.shape(),
                ));
            }

            sum += matrix.as_matrix();
        }

        let expert_count = expert_sets.len();
        let mean = sum / expert_count as f64;

        debug!(
            matrix_id = %matrix_id,
            expert_count,
            size = reference.size(),
            "Aggregated consensus matrix"
        );

        Ok(ConsensusMatrix::new(
            matrix_id.clone(),
            JudgmentMatrix::from_parts(reference.labels().to_vec(), mean),
            expert_count,
        ))
    }
}
