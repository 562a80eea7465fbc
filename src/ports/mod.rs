//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ExpertJudgmentStore` - Loads one expert's judgment matrices
//! - `ResultSink` - Persists primary, secondary, and global weights

mod expert_judgment_store;
mod result_sink;

pub use expert_judgment_store::{ExpertJudgmentStore, ExpertLoadError, ExpertSource};
pub use result_sink::{ResultSink, SinkError, WeightRun};
