//! File-based Result Sink
//!
//! Writes each run as a single YAML or JSON document, chosen by the output
//! path's extension. The parent directory is created when missing.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use super::WeightsDocument;
use crate::adapters::format::DocumentFormat;
use crate::ports::{ResultSink, SinkError, WeightRun};

/// Persists weight runs to one output file
#[derive(Debug, Clone)]
pub struct FileResultSink {
    path: PathBuf,
}

impl FileResultSink {
    /// Create a sink writing to `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The output file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode(&self, document: &WeightsDocument) -> Result<String, SinkError> {
        let format = DocumentFormat::from_path(&self.path)
            .ok_or_else(|| SinkError::UnsupportedFormat(self.path.display().to_string()))?;

        match format {
            DocumentFormat::Json => serde_json::to_string_pretty(document)
                .map_err(|e| SinkError::SerializationFailed(e.to_string())),
            DocumentFormat::Yaml => serde_yaml::to_string(document)
                .map_err(|e| SinkError::SerializationFailed(e.to_string())),
        }
    }
}

#[async_trait]
impl ResultSink for FileResultSink {
    async fn write(&self, run: &WeightRun) -> Result<(), SinkError> {
        let content = self.encode(&WeightsDocument::from(run))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        fs::write(&self.path, content).await?;

        info!(
            run_id = %run.run_id,
            path = %self.path.display(),
            "Weight results saved"
        );

        Ok(())
    }
}
