//! Error types for AHP weight computation.

use thiserror::Error;

use super::{MatrixId, MatrixShape};
use crate::domain::foundation::ExpertId;

/// Structural problems detected while building a judgment matrix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("Judgment matrix must compare at least one indicator")]
    Empty,

    #[error("Expected {expected} labels for the matrix rows, got {actual}")]
    LabelCountMismatch { expected: usize, actual: usize },

    #[error("Row {row} has {actual} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Indicator label '{label}' appears more than once")]
    DuplicateLabel { label: String },

    #[error("Entry ({row}, {column}) is not a finite number")]
    NonFinite { row: usize, column: usize },
}

/// Failures of the weight computation.
///
/// Every variant aborts the run: a global weight table is only meaningful
/// when every level was computed from complete, consistent input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AhpError {
    #[error("No expert judgment sets supplied for matrix '{matrix_id}'")]
    NoExperts { matrix_id: MatrixId },

    #[error("Expert {expert_id} (index {expert_index}) has no matrix '{matrix_id}'")]
    MissingMatrix {
        expert_index: usize,
        expert_id: ExpertId,
        matrix_id: MatrixId,
    },

    #[error("Matrix '{matrix_id}' from expert {expert_id} has shape {found}, expected {expected}")]
    ShapeMismatch {
        matrix_id: MatrixId,
        expert_id: ExpertId,
        expected: MatrixShape,
        found: MatrixShape,
    },

    #[error("Matrix '{matrix_id}' compares {size} indicators; at most {max} are supported")]
    UnsupportedMatrixSize {
        matrix_id: MatrixId,
        size: usize,
        max: usize,
    },

    #[error("Eigen-decomposition of matrix '{matrix_id}' did not converge")]
    EigenDecompositionFailed { matrix_id: MatrixId },

    #[error("Principal eigenvector of matrix '{matrix_id}' sums to zero")]
    DegenerateEigenvector { matrix_id: MatrixId },
}

impl AhpError {
    /// Creates a missing matrix error.
    pub fn missing_matrix(expert_index: usize, expert_id: &ExpertId, matrix_id: &MatrixId) -> Self {
        AhpError::MissingMatrix {
            expert_index,
            expert_id: expert_id.clone(),
            matrix_id: matrix_id.clone(),
        }
    }

    /// Creates a shape mismatch error.
    pub fn shape_mismatch(
        matrix_id: &MatrixId,
        expert_id: &ExpertId,
        expected: MatrixShape,
        found: MatrixShape,
    ) -> Self {
        AhpError::ShapeMismatch {
            matrix_id: matrix_id.clone(),
            expert_id: expert_id.clone(),
            expected,
            found,
        }
    }

    /// Returns the stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            AhpError::NoExperts { .. } => "NO_EXPERTS",
            AhpError::MissingMatrix { .. } => "MISSING_MATRIX",
            AhpError::ShapeMismatch { .. } => "SHAPE_MISMATCH",
            AhpError::UnsupportedMatrixSize { .. } => "UNSUPPORTED_MATRIX_SIZE",
            AhpError::EigenDecompositionFailed { .. } => "EIGEN_DECOMPOSITION_FAILED",
            AhpError::DegenerateEigenvector { .. } => "DEGENERATE_EIGENVECTOR",
        }
    }

    /// Returns the matrix the error refers to.
    pub fn matrix_id(&self) -> &MatrixId {
        match self {
            AhpError::NoExperts { matrix_id }
            | AhpError::MissingMatrix { matrix_id, .. }
            | AhpError::ShapeMismatch { matrix_id, .. }
            | AhpError::UnsupportedMatrixSize { matrix_id, .. }
            | AhpError::EigenDecompositionFailed { matrix_id }
            | AhpError::DegenerateEigenvector { matrix_id } => matrix_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expert() -> ExpertId {
        ExpertId::new("expert_3").unwrap()
    }

    #[test]
    fn missing_matrix_names_expert_and_matrix() {
        let err = AhpError::missing_matrix(2, &expert(), &MatrixId::from("A secondary indicators"));
        let message = err.to_string();
        assert!(message.contains("expert_3"));
        assert!(message.contains("index 2"));
        assert!(message.contains("A secondary indicators"));
        assert_eq!(err.code(), "MISSING_MATRIX");
    }

    #[test]
    fn shape_mismatch_shows_expected_and_found() {
        let err = AhpError::shape_mismatch(
            &MatrixId::from("primary indicators"),
            &expert(),
            MatrixShape::new(vec!["A".into(), "B".into()]),
            MatrixShape::new(vec!["A".into(), "B".into(), "C".into()]),
        );
        let message = err.to_string();
        assert!(message.contains("2x2 [A, B]"));
        assert!(message.contains("3x3 [A, B, C]"));
        assert_eq!(err.matrix_id().as_str(), "primary indicators");
    }

    #[test]
    fn unsupported_size_mentions_limit() {
        let err = AhpError::UnsupportedMatrixSize {
            matrix_id: MatrixId::from("big"),
            size: 12,
            max: 9,
        };
        assert!(err.to_string().contains("12 indicators"));
        assert!(err.to_string().contains("at most 9"));
    }

    #[test]
    fn matrix_error_ragged_row_displays_position() {
        let err = MatrixError::RaggedRow {
            row: 1,
            expected: 3,
            actual: 2,
        };
        assert_eq!(err.to_string(), "Row 1 has 2 entries, expected 3");
    }
}
