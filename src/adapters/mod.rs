//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `judgments` - Expert judgment stores (files, in-memory)
//! - `results` - Result sinks (files, in-memory)

pub mod format;
pub mod judgments;
pub mod results;

pub use format::DocumentFormat;
pub use judgments::{FileJudgmentStore, InMemoryJudgmentStore};
pub use results::{FileResultSink, InMemoryResultSink};
