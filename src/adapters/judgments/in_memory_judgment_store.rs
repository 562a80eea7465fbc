//! In-Memory Expert Judgment Store
//!
//! Serves judgment sets registered by location. Useful for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::ahp::ExpertJudgmentSet;
use crate::ports::{ExpertJudgmentStore, ExpertLoadError, ExpertSource};

/// In-memory judgment sets keyed by source location
#[derive(Debug, Clone, Default)]
pub struct InMemoryJudgmentStore {
    sets: Arc<RwLock<HashMap<PathBuf, ExpertJudgmentSet>>>,
}

impl InMemoryJudgmentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the judgments served for `location`
    pub async fn insert(&self, location: impl AsRef<Path>, set: ExpertJudgmentSet) {
        self.sets
            .write()
            .await
            .insert(location.as_ref().to_path_buf(), set);
    }

    /// Number of registered sources
    pub async fn source_count(&self) -> usize {
        self.sets.read().await.len()
    }
}

#[async_trait]
impl ExpertJudgmentStore for InMemoryJudgmentStore {
    async fn load(&self, source: &ExpertSource) -> Result<ExpertJudgmentSet, ExpertLoadError> {
        let sets = self.sets.read().await;
        let stored = sets
            .get(&source.location)
            .ok_or_else(|| ExpertLoadError::not_found(&source.expert_id, &source.location))?;

        // Re-key under the requesting expert so ids follow configuration order.
        let mut set = ExpertJudgmentSet::new(source.expert_id.clone());
        for matrix_id in stored.matrix_ids() {
            if let Some(matrix) = stored.get(matrix_id) {
                set.insert(matrix_id.clone(), matrix.clone());
            }
        }
        Ok(set)
    }
}
