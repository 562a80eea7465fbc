//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, timestamps, errors)
//! - `ahp` - Pure domain services for AHP weight computation

pub mod ahp;
pub mod foundation;
