//! Priority Computer - Eigenvector weights and consistency diagnostics.
//!
//! Implements Saaty's principal-eigenvector method: the weights of a
//! comparison group are the normalized eigenvector of the dominant eigenvalue
//! (λ_max), and the distance of λ_max from `n` measures how consistent the
//! judgments are.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{AhpError, ConsensusMatrix, JudgmentMatrix, MatrixId};

/// Largest comparison group with a published Random Index.
pub const MAX_MATRIX_SIZE: usize = 9;

/// Random Index by group size, indexed by `n` (index 0 unused).
pub const RANDOM_INDEX: [f64; MAX_MATRIX_SIZE + 1] =
    [0.0, 0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45];

/// Conventional upper bound for an acceptable consistency ratio.
pub const DEFAULT_CONSISTENCY_THRESHOLD: f64 = 0.10;

/// Returns RI(n), or `None` when no value is defined for `n`.
pub fn random_index(n: usize) -> Option<f64> {
    if n == 0 {
        return None;
    }
    RANDOM_INDEX.get(n).copied()
}

/// Weight assigned to one indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorWeight {
    pub indicator: String,
    pub weight: f64,
}

/// Ordered indicator weights summing to 1.0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightVector(Vec<IndicatorWeight>);

impl WeightVector {
    /// Pairs labels with weights in index order.
    pub fn from_pairs(labels: &[String], weights: &[f64]) -> Self {
        Self(
            labels
                .iter()
                .zip(weights)
                .map(|(indicator, &weight)| IndicatorWeight {
                    indicator: indicator.clone(),
                    weight,
                })
                .collect(),
        )
    }

    /// Iterates entries in indicator order.
    pub fn iter(&self) -> impl Iterator<Item = &IndicatorWeight> {
        self.0.iter()
    }

    /// Weight of a named indicator.
    pub fn get(&self, indicator: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|entry| entry.indicator == indicator)
            .map(|entry| entry.weight)
    }

    /// Indicator names in order.
    pub fn indicators(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|entry| entry.indicator.as_str())
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.0.iter().map(|entry| entry.weight).sum()
    }

    /// Number of indicators.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no indicators.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Consistency ratio CR = CI / RI(n).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConsistencyRatio(f64);

impl ConsistencyRatio {
    /// A perfectly consistent (or trivially small) group.
    pub const ZERO: Self = Self(0.0);

    /// Wraps a raw ratio.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw ratio.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// True when the ratio does not exceed `threshold`.
    pub fn is_acceptable(&self, threshold: f64) -> bool {
        self.0 <= threshold
    }
}

impl fmt::Display for ConsistencyRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

/// Weights and diagnostics derived from one comparison matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityResult {
    pub weights: WeightVector,
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub consistency_ratio: ConsistencyRatio,
}

/// Eigenvector-based priority computation.
pub struct PriorityComputer;

impl PriorityComputer {
    /// Computes weights and consistency for a consensus matrix.
    pub fn compute_weights(consensus: &ConsensusMatrix) -> Result<PriorityResult, AhpError> {
        Self::compute(consensus.matrix_id(), consensus.matrix())
    }

    /// Computes weights and consistency for any judgment matrix.
    ///
    /// # Algorithm
    /// 1. λ_max = largest real part among the (possibly complex) eigenvalues
    /// 2. weights = eigenvector of λ_max, normalized by its component sum
    /// 3. CI = (λ_max - n) / (n - 1), CR = CI / RI(n)
    ///
    /// # Edge Cases
    /// - n = 1: weight 1.0, CI = CR = 0, no decomposition
    /// - n <= 2: CR = 0 (RI is zero for these sizes)
    /// - n > 9: `UnsupportedMatrixSize`
    pub fn compute(
        matrix_id: &MatrixId,
        matrix: &JudgmentMatrix,
    ) -> Result<PriorityResult, AhpError> {
        let n = matrix.size();
        let ri = random_index(n).ok_or_else(|| AhpError::UnsupportedMatrixSize {
            matrix_id: matrix_id.clone(),
            size: n,
            max: MAX_MATRIX_SIZE,
        })?;

        if n == 1 {
            return Ok(PriorityResult {
                weights: WeightVector::from_pairs(matrix.labels(), &[1.0]),
                lambda_max: matrix.get(0, 0).unwrap_or(1.0),
                consistency_index: 0.0,
                consistency_ratio: ConsistencyRatio::ZERO,
            });
        }

        let values = matrix.as_matrix();
        let lambda_max = Self::principal_eigenvalue(values).ok_or_else(|| {
            AhpError::EigenDecompositionFailed {
                matrix_id: matrix_id.clone(),
            }
        })?;

        let eigenvector = Self::eigenvector_for(values, lambda_max).ok_or_else(|| {
            AhpError::EigenDecompositionFailed {
                matrix_id: matrix_id.clone(),
            }
        })?;

        let total: f64 = eigenvector.iter().sum();
        if !total.is_finite() || total.abs() < f64::EPSILON {
            return Err(AhpError::DegenerateEigenvector {
                matrix_id: matrix_id.clone(),
            });
        }
        let weights: Vec<f64> = eigenvector.iter().map(|component| component / total).collect();

        let size = n as f64;
        let consistency_index = (lambda_max - size) / (size - 1.0);
        let consistency_ratio = if n <= 2 {
            ConsistencyRatio::ZERO
        } else {
            ConsistencyRatio::new(consistency_index / ri)
        };

        Ok(PriorityResult {
            weights: WeightVector::from_pairs(matrix.labels(), &weights),
            lambda_max,
            consistency_index,
            consistency_ratio,
        })
    }

    /// Real part of the eigenvalue with the largest real part.
    fn principal_eigenvalue(values: &DMatrix<f64>) -> Option<f64> {
        let lambda = values
            .complex_eigenvalues()
            .iter()
            .map(|eigenvalue| eigenvalue.re)
            .fold(f64::NEG_INFINITY, f64::max);

        lambda.is_finite().then_some(lambda)
    }

    /// Real eigenvector for `lambda`: the right singular vector of
    /// `A - λI` with the smallest singular value.
    fn eigenvector_for(values: &DMatrix<f64>, lambda: f64) -> Option<Vec<f64>> {
        let n = values.nrows();
        let shifted = values - DMatrix::<f64>::identity(n, n) * lambda;
        let svd = shifted.svd(false, true);
        let v_t = svd.v_t?;

        let (null_index, _) = svd
            .singular_values
            .iter()
            .enumerate()
            .fold((0, f64::INFINITY), |best, (index, &value)| {
                if value < best.1 {
                    (index, value)
                } else {
                    best
                }
            });

        let vector: Vec<f64> = v_t.row(null_index).iter().copied().collect();
        vector.iter().all(|c| c.is_finite()).then_some(vector)
    }
}
