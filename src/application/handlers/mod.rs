//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod weights;

pub use weights::{
    ComputeWeightsCommand, ComputeWeightsError, ComputeWeightsHandler, ComputeWeightsResult,
};
