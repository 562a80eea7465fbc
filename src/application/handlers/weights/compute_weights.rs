//! ComputeWeightsHandler - Runs one hierarchical weight computation.
//!
//! Loads every configured expert, drops the ones whose judgments cannot be
//! read, computes the hierarchy over the rest and hands the table to the
//! result sink.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::ahp::{AhpError, HierarchyWeightEngine};
use crate::ports::{
    ExpertJudgmentStore, ExpertLoadError, ExpertSource, ResultSink, SinkError, WeightRun,
};

/// Command to compute weights from a list of expert sources.
#[derive(Debug, Clone)]
pub struct ComputeWeightsCommand {
    /// Expert sources in aggregation order.
    pub sources: Vec<ExpertSource>,
}

/// Result of a successful computation.
#[derive(Debug, Clone)]
pub struct ComputeWeightsResult {
    /// The persisted run.
    pub run: WeightRun,
    /// Experts left out because their judgments could not be loaded.
    pub skipped: Vec<ExpertLoadError>,
}

/// Error type for weight computation.
#[derive(Debug, Clone, Error)]
pub enum ComputeWeightsError {
    /// Every configured source failed to load (or none were configured).
    #[error("No expert judgments could be loaded ({attempted} source(s) attempted)")]
    NoExpertsLoaded { attempted: usize },

    /// The hierarchy could not be computed.
    #[error(transparent)]
    Computation(#[from] AhpError),

    /// The results could not be persisted.
    #[error("Failed to write results: {0}")]
    Sink(#[from] SinkError),
}

/// Handler for computing hierarchical weights.
pub struct ComputeWeightsHandler {
    store: Arc<dyn ExpertJudgmentStore>,
    sink: Arc<dyn ResultSink>,
    engine: HierarchyWeightEngine,
}

impl ComputeWeightsHandler {
    pub fn new(
        store: Arc<dyn ExpertJudgmentStore>,
        sink: Arc<dyn ResultSink>,
        engine: HierarchyWeightEngine,
    ) -> Self {
        Self {
            store,
            sink,
            engine,
        }
    }

    pub async fn handle(
        &self,
        cmd: ComputeWeightsCommand,
    ) -> Result<ComputeWeightsResult, ComputeWeightsError> {
        let attempted = cmd.sources.len();

        // 1. Load experts, dropping unreadable ones
        let mut expert_sets = Vec::with_capacity(attempted);
        let mut skipped = Vec::new();
        for source in &cmd.sources {
            match self.store.load(source).await {
                Ok(set) => {
                    info!(expert = %source.expert_id, matrices = set.len(), "Loaded expert judgments");
                    expert_sets.push(set);
                }
                Err(err) => {
                    warn!(expert = %source.expert_id, error = %err, "Skipping expert");
                    skipped.push(err);
                }
            }
        }

        if expert_sets.is_empty() {
            return Err(ComputeWeightsError::NoExpertsLoaded { attempted });
        }

        info!(
            loaded = expert_sets.len(),
            skipped = skipped.len(),
            "Computing weights"
        );

        // 2. Compute the hierarchy
        let table = self.engine.compute_hierarchy(&expert_sets)?;

        // 3. Persist
        let run = WeightRun::new(table);
        self.sink.write(&run).await?;

        info!(run_id = %run.run_id, "Weight run complete");

        Ok(ComputeWeightsResult { run, skipped })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryJudgmentStore, InMemoryResultSink};
    use crate::domain::ahp::{ExpertJudgmentSet, JudgmentMatrix};
    use crate::domain::foundation::ExpertId;
    use approx::assert_relative_eq;
    use async_trait::async_trait;

    // ─────────────────────────────────────────────────────────────────────
    // Mock implementations
    // ─────────────────────────────────────────────────────────────────────

    struct FailingSink;

    #[async_trait]
    impl ResultSink for FailingSink {
        async fn write(&self, _run: &WeightRun) -> Result<(), SinkError> {
            Err(SinkError::IoError("disk full".to_string()))
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Helpers
    // ─────────────────────────────────────────────────────────────────────

    fn judgments(primary_ab: f64) -> ExpertJudgmentSet {
        ExpertJudgmentSet::new(ExpertId::positional(1))
            .with_matrix(
                "primary indicators",
                JudgmentMatrix::new(
                    vec!["A", "B"],
                    vec![vec![1.0, primary_ab], vec![1.0 / primary_ab, 1.0]],
                )
                .unwrap(),
            )
            .with_matrix(
                "A secondary indicators",
                JudgmentMatrix::new(vec!["A1", "A2"], vec![vec![1.0, 1.0], vec![1.0, 1.0]])
                    .unwrap(),
            )
            .with_matrix(
                "B secondary indicators",
                JudgmentMatrix::new(vec!["B1"], vec![vec![1.0]]).unwrap(),
            )
    }

    fn sources(count: usize) -> Vec<ExpertSource> {
        let locations: Vec<String> = (1..=count).map(|i| format!("expert_{}.yaml", i)).collect();
        ExpertSource::from_locations(&locations)
    }

    async fn store_with(count: usize) -> Arc<InMemoryJudgmentStore> {
        let store = Arc::new(InMemoryJudgmentStore::new());
        for i in 1..=count {
            store.insert(format!("expert_{}.yaml", i), judgments(2.0)).await;
        }
        store
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn computes_and_persists_weights() {
        let store = store_with(2).await;
        let sink = Arc::new(InMemoryResultSink::new());
        let handler =
            ComputeWeightsHandler::new(store, sink.clone(), HierarchyWeightEngine::default());

        let result = handler
            .handle(ComputeWeightsCommand { sources: sources(2) })
            .await
            .unwrap();

        let table = &result.run.table;
        assert!(result.skipped.is_empty());
        assert_eq!(table.experts().len(), 2);
        assert_relative_eq!(table.primary().weights().get("A").unwrap(), 2.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(table.global_weight("A", "A1").unwrap(), 1.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(table.global_weight("B", "B1").unwrap(), 1.0 / 3.0, epsilon = 1e-9);

        assert_eq!(sink.last_run().await, Some(result.run));
    }

    #[tokio::test]
    async fn unreadable_experts_are_skipped() {
        let store = store_with(2).await;
        let sink = Arc::new(InMemoryResultSink::new());
        let handler =
            ComputeWeightsHandler::new(store, sink.clone(), HierarchyWeightEngine::default());

        let result = handler
            .handle(ComputeWeightsCommand { sources: sources(3) })
            .await
            .unwrap();

        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.skipped[0].expert_id().as_str(), "expert_3");
        assert_eq!(
            result.run.table.experts(),
            &[ExpertId::positional(1), ExpertId::positional(2)]
        );
    }

    #[tokio::test]
    async fn no_loadable_experts_is_an_error() {
        let store = Arc::new(InMemoryJudgmentStore::new());
        let sink = Arc::new(InMemoryResultSink::new());
        let handler =
            ComputeWeightsHandler::new(store, sink.clone(), HierarchyWeightEngine::default());

        let result = handler.handle(ComputeWeightsCommand { sources: sources(2) }).await;

        assert!(matches!(
            result,
            Err(ComputeWeightsError::NoExpertsLoaded { attempted: 2 })
        ));
        assert!(sink.runs().await.is_empty());
    }

    #[tokio::test]
    async fn computation_failure_writes_nothing() {
        let store = store_with(1).await;
        store
            .insert(
                "expert_2.yaml",
                ExpertJudgmentSet::new(ExpertId::positional(2)).with_matrix(
                    "primary indicators",
                    JudgmentMatrix::new(vec!["A", "B"], vec![vec![1.0, 2.0], vec![0.5, 1.0]])
                        .unwrap(),
                ),
            )
            .await;
        let sink = Arc::new(InMemoryResultSink::new());
        let handler =
            ComputeWeightsHandler::new(store, sink.clone(), HierarchyWeightEngine::default());

        let result = handler.handle(ComputeWeightsCommand { sources: sources(2) }).await;

        match result {
            Err(ComputeWeightsError::Computation(AhpError::MissingMatrix {
                expert_id,
                matrix_id,
                ..
            })) => {
                assert_eq!(expert_id.as_str(), "expert_2");
                assert_eq!(matrix_id.as_str(), "A secondary indicators");
            }
            other => panic!("Expected MissingMatrix, got {:?}", other),
        }
        assert!(sink.runs().await.is_empty());
    }

    #[tokio::test]
    async fn sink_failure_is_reported() {
        let store = store_with(1).await;
        let handler = ComputeWeightsHandler::new(
            store,
            Arc::new(FailingSink),
            HierarchyWeightEngine::default(),
        );

        let result = handler.handle(ComputeWeightsCommand { sources: sources(1) }).await;

        assert!(matches!(
            result,
            Err(ComputeWeightsError::Sink(SinkError::IoError(_)))
        ));
    }
}
