//! Expert Judgment Store Port - Loading one expert's comparison matrices.
//!
//! The computation never reads files itself. Each configured expert source is
//! handed to a store, which returns that expert's judgment set or a load
//! error. A load error removes only that expert from the run.

use async_trait::async_trait;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::ahp::{ExpertJudgmentSet, MatrixError, MatrixId};
use crate::domain::foundation::ExpertId;

/// Where one expert's judgments come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpertSource {
    pub expert_id: ExpertId,
    pub location: PathBuf,
}

impl ExpertSource {
    /// Creates a source for an expert.
    pub fn new(expert_id: ExpertId, location: impl Into<PathBuf>) -> Self {
        Self {
            expert_id,
            location: location.into(),
        }
    }

    /// Builds sources for an ordered list of locations, naming experts
    /// `expert_1`, `expert_2`, ... by position.
    pub fn from_locations<P: AsRef<Path>>(locations: &[P]) -> Vec<Self> {
        locations
            .iter()
            .enumerate()
            .map(|(index, location)| {
                Self::new(ExpertId::positional(index + 1), location.as_ref())
            })
            .collect()
    }
}

impl fmt::Display for ExpertSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.expert_id, self.location.display())
    }
}

/// Port for loading expert judgment sets.
///
/// # Contract
///
/// Implementations must:
/// - Return every named matrix the source holds, keyed by matrix id
/// - Report a missing source as `ExpertLoadError::NotFound`
/// - Never return a partially loaded set
#[async_trait]
pub trait ExpertJudgmentStore: Send + Sync {
    /// Load all matrices supplied by one expert.
    async fn load(&self, source: &ExpertSource) -> Result<ExpertJudgmentSet, ExpertLoadError>;
}

/// Errors loading a single expert's judgments.
#[derive(Debug, Clone, Error)]
pub enum ExpertLoadError {
    /// Source does not exist.
    #[error("Judgment source for {expert_id} not found: {location}")]
    NotFound { expert_id: ExpertId, location: String },

    /// Source exists but could not be read.
    #[error("Failed to read judgments for {expert_id}: {message}")]
    Io { expert_id: ExpertId, message: String },

    /// Source could not be decoded.
    #[error("Failed to parse judgments for {expert_id}: {message}")]
    Parse { expert_id: ExpertId, message: String },

    /// Source format is not recognised.
    #[error("Unsupported judgment source format for {expert_id}: {location}")]
    UnsupportedFormat { expert_id: ExpertId, location: String },

    /// A matrix in the source is structurally invalid.
    #[error("Matrix '{matrix_id}' from {expert_id} is invalid: {source}")]
    InvalidMatrix {
        expert_id: ExpertId,
        matrix_id: MatrixId,
        #[source]
        source: MatrixError,
    },
}

impl ExpertLoadError {
    /// Creates a not found error.
    pub fn not_found(expert_id: &ExpertId, location: &Path) -> Self {
        Self::NotFound {
            expert_id: expert_id.clone(),
            location: location.display().to_string(),
        }
    }

    /// Creates an IO error.
    pub fn io(expert_id: &ExpertId, message: impl Into<String>) -> Self {
        Self::Io {
            expert_id: expert_id.clone(),
            message: message.into(),
        }
    }

    /// Creates a parse error.
    pub fn parse(expert_id: &ExpertId, message: impl Into<String>) -> Self {
        Self::Parse {
            expert_id: expert_id.clone(),
            message: message.into(),
        }
    }

    /// Creates an unsupported format error.
    pub fn unsupported_format(expert_id: &ExpertId, location: &Path) -> Self {
        Self::UnsupportedFormat {
            expert_id: expert_id.clone(),
            location: location.display().to_string(),
        }
    }

    /// Creates an invalid matrix error.
    pub fn invalid_matrix(expert_id: &ExpertId, matrix_id: MatrixId, source: MatrixError) -> Self {
        Self::InvalidMatrix {
            expert_id: expert_id.clone(),
            matrix_id,
            source,
        }
    }

    /// The expert whose source failed.
    pub fn expert_id(&self) -> &ExpertId {
        match self {
            Self::NotFound { expert_id, .. }
            | Self::Io { expert_id, .. }
            | Self::Parse { expert_id, .. }
            | Self::UnsupportedFormat { expert_id, .. }
            | Self::InvalidMatrix { expert_id, .. } => expert_id,
        }
    }

    /// Maps an IO error, distinguishing a missing source.
    pub fn from_io(expert_id: &ExpertId, location: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::not_found(expert_id, location),
            _ => Self::io(expert_id, err.to_string()),
        }
    }
}
