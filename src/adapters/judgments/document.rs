//! Serialized shape of one expert's judgment document.
//!
//! ```yaml
//! matrices:
//!   primary indicators:
//!     labels: [A, B]
//!     values: [[1, 2], [0.5, 1]]
//!   A secondary indicators:
//!     labels: [A1, A2]
//!     values: [[1, 3], [0.333, 1]]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::ahp::{ExpertJudgmentSet, JudgmentMatrix, MatrixId};
use crate::domain::foundation::ExpertId;
use crate::ports::ExpertLoadError;

/// One labelled comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixDocument {
    pub labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

/// All comparison tables supplied by one expert, keyed by matrix id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JudgmentDocument {
    pub matrices: BTreeMap<String, MatrixDocument>,
}

impl JudgmentDocument {
    /// Validates every table and builds the expert's judgment set.
    pub fn into_judgment_set(
        self,
        expert_id: &ExpertId,
    ) -> Result<ExpertJudgmentSet, ExpertLoadError> {
        let mut set = ExpertJudgmentSet::new(expert_id.clone());

        for (name, table) in self.matrices {
            let matrix_id = MatrixId::new(name);
            let matrix = JudgmentMatrix::new(table.labels, table.values).map_err(|e| {
                ExpertLoadError::invalid_matrix(expert_id, matrix_id.clone(), e)
            })?;
            set.insert(matrix_id, matrix);
        }

        Ok(set)
    }

    /// Captures a judgment set as a document.
    pub fn from_judgment_set(set: &ExpertJudgmentSet) -> Self {
        let matrices = set
            .matrix_ids()
            .filter_map(|matrix_id| {
                set.get(matrix_id).map(|matrix| {
                    (
                        matrix_id.as_str().to_string(),
                        MatrixDocument {
                            labels: matrix.labels().to_vec(),
                            values: matrix.rows(),
                        },
                    )
                })
            })
            .collect();

        Self { matrices }
    }
}
