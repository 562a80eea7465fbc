//! Result Sink Adapters
//!
//! ## Available Adapters
//!
//! - **FileResultSink** - Writes each run as one YAML/JSON document
//! - **InMemoryResultSink** - Keeps runs in memory (testing)

mod document;
mod file_result_sink;
mod in_memory_result_sink;

pub use document::{SecondarySection, WeightsDocument};
pub use file_result_sink::FileResultSink;
pub use in_memory_result_sink::InMemoryResultSink;
