//! File-based Expert Judgment Store
//!
//! Reads one YAML or JSON document per expert. The format is chosen by the
//! file extension.

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use super::JudgmentDocument;
use crate::adapters::format::DocumentFormat;
use crate::domain::ahp::ExpertJudgmentSet;
use crate::ports::{ExpertJudgmentStore, ExpertLoadError, ExpertSource};

/// Loads expert judgment documents from disk.
#[derive(Debug, Clone, Default)]
pub struct FileJudgmentStore;

impl FileJudgmentStore {
    /// Create a new file store
    pub fn new() -> Self {
        Self
    }

    fn decode(
        source: &ExpertSource,
        format: DocumentFormat,
        content: &str,
    ) -> Result<JudgmentDocument, ExpertLoadError> {
        match format {
            DocumentFormat::Json => serde_json::from_str(content)
                .map_err(|e| ExpertLoadError::parse(&source.expert_id, e.to_string())),
            DocumentFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| ExpertLoadError::parse(&source.expert_id, e.to_string())),
        }
    }
}

#[async_trait]
impl ExpertJudgmentStore for FileJudgmentStore {
    async fn load(&self, source: &ExpertSource) -> Result<ExpertJudgmentSet, ExpertLoadError> {
        let format = DocumentFormat::from_path(&source.location).ok_or_else(|| {
            ExpertLoadError::unsupported_format(&source.expert_id, &source.location)
        })?;

        let content = fs::read_to_string(&source.location)
            .await
            .map_err(|e| ExpertLoadError::from_io(&source.expert_id, &source.location, e))?;

        let set = Self::decode(source, format, &content)?.into_judgment_set(&source.expert_id)?;

        debug!(
            expert_id = %source.expert_id,
            location = %source.location.display(),
            matrix_count = set.len(),
            "Loaded expert judgments"
        );

        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::MatrixId;
    use crate::domain::foundation::ExpertId;
    use tempfile::TempDir;

    const YAML: &str = r#"
matrices:
  primary indicators:
    labels: [A, B]
    values: [[1, 2], [0.5, 1]]
"#;

    const JSON: &str = r#"{
        "matrices": {
            "primary indicators": {
                "labels": ["A", "B"],
                "values": [[1, 4], [0.25, 1]]
            }
        }
    }"#;

    fn source(dir: &TempDir, name: &str) -> ExpertSource {
        ExpertSource::new(ExpertId::positional(1), dir.path().join(name))
    }

    #[tokio::test]
    async fn loads_yaml_document() {
        let dir = TempDir::new().unwrap();
        let source = source(&dir, "expert.yaml");
        fs::write(&source.location, YAML).await.unwrap();

        let set = FileJudgmentStore::new().load(&source).await.unwrap();

        let primary = set.get(&MatrixId::from("primary indicators")).unwrap();
        assert_eq!(primary.get(0, 1), Some(2.0));
        assert_eq!(set.expert_id().as_str(), "expert_1");
    }

    #[tokio::test]
    async fn loads_json_document() {
        let dir = TempDir::new().unwrap();
        let source = source(&dir, "expert.json");
        fs::write(&source.location, JSON).await.unwrap();

        let set = FileJudgmentStore::new().load(&source).await.unwrap();

        let primary = set.get(&MatrixId::from("primary indicators")).unwrap();
        assert_eq!(primary.get(1, 0), Some(0.25));
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let source = source(&dir, "absent.yaml");

        let result = FileJudgmentStore::new().load(&source).await;

        assert!(matches!(result, Err(ExpertLoadError::NotFound { .. })));
    }

    #[tokio::test]
    async fn malformed_document_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let source = source(&dir, "broken.json");
        fs::write(&source.location, "{ not json").await.unwrap();

        let result = FileJudgmentStore::new().load(&source).await;

        assert!(matches!(result, Err(ExpertLoadError::Parse { .. })));
    }

    #[tokio::test]
    async fn unknown_extension_is_unsupported() {
        let dir = TempDir::new().unwrap();
        let source = source(&dir, "judgments.xlsx");

        let result = FileJudgmentStore::new().load(&source).await;

        assert!(matches!(result, Err(ExpertLoadError::UnsupportedFormat { .. })));
    }
}
