//! Expert Judgment Store Adapters
//!
//! ## Available Adapters
//!
//! - **FileJudgmentStore** - Reads one YAML/JSON document per expert
//! - **InMemoryJudgmentStore** - Serves registered sets (testing)

mod document;
mod file_judgment_store;
mod in_memory_judgment_store;

pub use document::{JudgmentDocument, MatrixDocument};
pub use file_judgment_store::FileJudgmentStore;
pub use in_memory_judgment_store::InMemoryJudgmentStore;
