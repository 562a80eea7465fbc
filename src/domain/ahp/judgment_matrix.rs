//! Judgment matrices and the per-expert sets that carry them.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

use super::MatrixError;
use crate::domain::foundation::ExpertId;

/// Identifier of a comparison matrix within an expert's judgment set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatrixId(String);

impl MatrixId {
    /// Creates a matrix identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatrixId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MatrixId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for MatrixId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Size and ordered labels of a matrix, used when reporting mismatches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixShape {
    pub size: usize,
    pub labels: Vec<String>,
}

impl MatrixShape {
    /// Creates a shape from ordered labels.
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            size: labels.len(),
            labels,
        }
    }
}

impl fmt::Display for MatrixShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} [{}]", self.size, self.size, self.labels.join(", "))
    }
}

/// A square pairwise-comparison matrix labelled by indicator names.
///
/// Entry `(i, j)` is the judged importance of indicator `i` over indicator `j`.
/// Rows and columns share the same ordered labels. Reciprocity and positivity
/// are assumed rather than checked; construction only rejects tables that
/// cannot be treated as a square numeric matrix at all.
#[derive(Debug, Clone, PartialEq)]
pub struct JudgmentMatrix {
    labels: Vec<String>,
    values: DMatrix<f64>,
}

impl JudgmentMatrix {
    /// Builds a matrix from row-major values.
    ///
    /// # Errors
    /// - `Empty` if there are no labels
    /// - `LabelCountMismatch` if the row count differs from the label count
    /// - `RaggedRow` if any row is not as long as the label list
    /// - `DuplicateLabel` if two indicators share a name
    /// - `NonFinite` for NaN or infinite entries
    pub fn new(
        labels: Vec<impl Into<String>>,
        rows: Vec<Vec<f64>>,
    ) -> Result<Self, MatrixError> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let n = labels.len();

        if n == 0 {
            return Err(MatrixError::Empty);
        }

        if rows.len() != n {
            return Err(MatrixError::LabelCountMismatch {
                expected: rows.len(),
                actual: n,
            });
        }

        let mut seen = HashSet::with_capacity(n);
        for label in &labels {
            if !seen.insert(label.as_str()) {
                return Err(MatrixError::DuplicateLabel {
                    label: label.clone(),
                });
            }
        }

        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(MatrixError::RaggedRow {
                    row: row_index,
                    expected: n,
                    actual: row.len(),
                });
            }
            if let Some(column) = row.iter().position(|v| !v.is_finite()) {
                return Err(MatrixError::NonFinite {
                    row: row_index,
                    column,
                });
            }
        }

        let values = DMatrix::from_fn(n, n, |i, j| rows[i][j]);
        Ok(Self { labels, values })
    }

    /// Builds a perfectly consistent matrix from a known weight vector,
    /// with `entry(i, j) = weights[i] / weights[j]`.
    pub fn from_weights(
        labels: Vec<impl Into<String>>,
        weights: &[f64],
    ) -> Result<Self, MatrixError> {
        let rows = weights
            .iter()
            .map(|wi| weights.iter().map(|wj| wi / wj).collect())
            .collect();
        Self::new(labels, rows)
    }

    /// Wraps an already-validated value matrix.
    pub(crate) fn from_parts(labels: Vec<String>, values: DMatrix<f64>) -> Self {
        debug_assert_eq!(labels.len(), values.nrows());
        debug_assert!(values.is_square());
        Self { labels, values }
    }

    /// Number of indicators compared.
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    /// Ordered indicator labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns entry `(row, column)`, if in range.
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.values.get((row, column)).copied()
    }

    /// Returns the underlying numeric matrix.
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// Returns the values as row-major nested vectors.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.values
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    /// Returns the size and labels of this matrix.
    pub fn shape(&self) -> MatrixShape {
        MatrixShape::new(self.labels.clone())
    }

    /// True when both matrices compare the same indicators in the same order.
    pub fn same_shape(&self, other: &JudgmentMatrix) -> bool {
        self.labels == other.labels
    }
}

/// One expert's judgment matrices, keyed by matrix identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpertJudgmentSet {
    expert_id: ExpertId,
    matrices: BTreeMap<MatrixId, JudgmentMatrix>,
}

impl ExpertJudgmentSet {
    /// Creates an empty judgment set for an expert.
    pub fn new(expert_id: ExpertId) -> Self {
        Self {
            expert_id,
            matrices: BTreeMap::new(),
        }
    }

    /// Adds a matrix, builder style.
    pub fn with_matrix(mut self, matrix_id: impl Into<MatrixId>, matrix: JudgmentMatrix) -> Self {
        self.insert(matrix_id, matrix);
        self
    }

    /// Adds or replaces a matrix.
    pub fn insert(&mut self, matrix_id: impl Into<MatrixId>, matrix: JudgmentMatrix) {
        self.matrices.insert(matrix_id.into(), matrix);
    }

    /// The expert who supplied these judgments.
    pub fn expert_id(&self) -> &ExpertId {
        &self.expert_id
    }

    /// Looks up a matrix by identifier.
    pub fn get(&self, matrix_id: &MatrixId) -> Option<&JudgmentMatrix> {
        self.matrices.get(matrix_id)
    }

    /// Returns true if the set contains the matrix.
    pub fn contains(&self, matrix_id: &MatrixId) -> bool {
        self.matrices.contains_key(matrix_id)
    }

    /// Identifiers of all matrices in the set.
    pub fn matrix_ids(&self) -> impl Iterator<Item = &MatrixId> {
        self.matrices.keys()
    }

    /// Number of matrices in the set.
    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    /// Returns true if the set holds no matrices.
    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_square_labelled_matrix() {
        let m = JudgmentMatrix::new(vec!["A", "B"], vec![vec![1.0, 2.0], vec![0.5, 1.0]]).unwrap();
        assert_eq!(m.size(), 2);
        assert_eq!(m.labels(), &["A".to_string(), "B".to_string()]);
        assert_eq!(m.get(0, 1), Some(2.0));
        assert_eq!(m.get(1, 0), Some(0.5));
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn new_rejects_empty_matrix() {
        let result = JudgmentMatrix::new(Vec::<String>::new(), vec![]);
        assert_eq!(result, Err(MatrixError::Empty));
    }

    #[test]
    fn new_rejects_label_count_mismatch() {
        let result = JudgmentMatrix::new(vec!["A"], vec![vec![1.0, 2.0], vec![0.5, 1.0]]);
        assert!(matches!(result, Err(MatrixError::LabelCountMismatch { .. })));
    }

    #[test]
    fn new_rejects_ragged_rows() {
        let result = JudgmentMatrix::new(vec!["A", "B"], vec![vec![1.0, 2.0], vec![0.5]]);
        assert_eq!(
            result,
            Err(MatrixError::RaggedRow {
                row: 1,
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn new_rejects_duplicate_labels() {
        let result = JudgmentMatrix::new(vec!["A", "A"], vec![vec![1.0, 1.0], vec![1.0, 1.0]]);
        assert!(matches!(result, Err(MatrixError::DuplicateLabel { label }) if label == "A"));
    }

    #[test]
    fn new_rejects_non_finite_entries() {
        let result = JudgmentMatrix::new(vec!["A", "B"], vec![vec![1.0, f64::NAN], vec![0.5, 1.0]]);
        assert_eq!(result, Err(MatrixError::NonFinite { row: 0, column: 1 }));
    }

    #[test]
    fn from_weights_builds_ratio_matrix() {
        let m = JudgmentMatrix::from_weights(vec!["A", "B", "C"], &[0.5, 0.25, 0.25]).unwrap();
        assert_eq!(m.get(0, 1), Some(2.0));
        assert_eq!(m.get(1, 0), Some(0.5));
        assert_eq!(m.get(2, 2), Some(1.0));
    }

    #[test]
    fn rows_round_trip_values() {
        let rows = vec![vec![1.0, 3.0], vec![1.0 / 3.0, 1.0]];
        let m = JudgmentMatrix::new(vec!["X", "Y"], rows.clone()).unwrap();
        assert_eq!(m.rows(), rows);
    }

    #[test]
    fn same_shape_compares_ordered_labels() {
        let ab = JudgmentMatrix::new(vec!["A", "B"], vec![vec![1.0, 2.0], vec![0.5, 1.0]]).unwrap();
        let ba = JudgmentMatrix::new(vec!["B", "A"], vec![vec![1.0, 2.0], vec![0.5, 1.0]]).unwrap();
        assert!(ab.same_shape(&ab.clone()));
        assert!(!ab.same_shape(&ba));
    }

    #[test]
    fn expert_set_stores_matrices_by_id() {
        let m = JudgmentMatrix::new(vec!["A"], vec![vec![1.0]]).unwrap();
        let set = ExpertJudgmentSet::new(ExpertId::positional(1))
            .with_matrix("primary indicators", m.clone());

        assert_eq!(set.len(), 1);
        assert!(set.contains(&MatrixId::from("primary indicators")));
        assert_eq!(set.get(&MatrixId::from("primary indicators")), Some(&m));
        assert!(set.get(&MatrixId::from("other")).is_none());
        assert_eq!(set.expert_id().as_str(), "expert_1");
    }

    #[test]
    fn matrix_shape_displays_size_and_labels() {
        let shape = MatrixShape::new(vec!["A1".into(), "A2".into()]);
        assert_eq!(shape.to_string(), "2x2 [A1, A2]");
    }
}
