//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the franchise calculator domain.

mod cost_ratio;
mod errors;

pub use cost_ratio::CostRatio;
pub use errors::{ErrorCode, ValidationError};
