//! In-Memory Result Sink
//!
//! Keeps written runs in memory. Useful for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{ResultSink, SinkError, WeightRun};

/// In-memory record of written runs
#[derive(Debug, Clone, Default)]
pub struct InMemoryResultSink {
    runs: Arc<RwLock<Vec<WeightRun>>>,
}

impl InMemoryResultSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// All runs written so far, oldest first
    pub async fn runs(&self) -> Vec<WeightRun> {
        self.runs.read().await.clone()
    }

    /// The most recently written run
    pub async fn last_run(&self) -> Option<WeightRun> {
        self.runs.read().await.last().cloned()
    }
}

#[async_trait]
impl ResultSink for InMemoryResultSink {
    async fn write(&self, run: &WeightRun) -> Result<(), SinkError> {
        self.runs.write().await.push(run.clone());
        Ok(())
    }
}
