//! Result Sink Port - Persisting computed weight tables.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::domain::ahp::HierarchicalWeightTable;
use crate::domain::foundation::{RunId, Timestamp};

/// One completed computation, as handed to a sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightRun {
    pub run_id: RunId,
    pub computed_at: Timestamp,
    pub table: HierarchicalWeightTable,
}

impl WeightRun {
    /// Stamps a freshly computed table with a new run id and the current time.
    pub fn new(table: HierarchicalWeightTable) -> Self {
        Self {
            run_id: RunId::new(),
            computed_at: Timestamp::now(),
            table,
        }
    }
}

/// Port for persisting weight results.
///
/// # Contract
///
/// Implementations persist three logical tables: primary weights, secondary
/// weights grouped by primary indicator, and global weights. Consistency
/// ratios are diagnostic and need not be persisted.
#[async_trait]
pub trait ResultSink: Send + Sync {
    /// Persist the results of one run.
    async fn write(&self, run: &WeightRun) -> Result<(), SinkError>;
}

/// Errors persisting results.
#[derive(Debug, Clone, Error)]
pub enum SinkError {
    #[error("Failed to serialize results: {0}")]
    SerializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

impl From<std::io::Error> for SinkError {
    fn from(err: std::io::Error) -> Self {
        SinkError::IoError(err.to_string())
    }
}
