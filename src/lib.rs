//! AHP Weights - Hierarchical indicator weights from expert judgments
//!
//! This crate aggregates pairwise-comparison matrices from several experts,
//! derives local priority weights with the principal-eigenvector method,
//! checks consistency and combines a two-level hierarchy into global weights.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
