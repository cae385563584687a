//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `franchise` - Industry profiles and the franchise economics evaluator

pub mod foundation;
pub mod franchise;
