//! Document formats shared by the file adapters.

use std::path::Path;

/// Structured text format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Detects the format from a path's extension (case-insensitive).
    ///
    /// `.json` is JSON; `.yaml` and `.yml` are YAML. Anything else is `None`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}
