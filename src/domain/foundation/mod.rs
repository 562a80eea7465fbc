//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, and validation errors that form the
//! vocabulary shared by the AHP domain, ports, and adapters.

mod errors;
mod ids;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{ExpertId, RunId};
pub use timestamp::Timestamp;
