//! Calculator HTTP adapter module.
//!
//! Provides REST API endpoints for industry listing, the input form and
//! location evaluation.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{CalculatorApiError, CalculatorAppState};
pub use routes::calculator_router;
