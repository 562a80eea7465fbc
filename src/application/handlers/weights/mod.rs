//! Weight computation handlers.

mod compute_weights;

pub use compute_weights::{
    ComputeWeightsCommand, ComputeWeightsError, ComputeWeightsHandler, ComputeWeightsResult,
};
