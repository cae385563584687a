//! Route configuration for calculator endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{describe_form, evaluate, health, list_industries, CalculatorAppState};

/// Creates the calculator router.
///
/// Routes:
/// - `GET /api/industries` - Selectable industry profiles
/// - `GET /api/form` - Form defaults and input minimums
/// - `POST /api/evaluate` - Evaluate a location
/// - `GET /health` - Liveness probe
pub fn calculator_router() -> Router<CalculatorAppState> {
    Router::new()
        .route("/api/industries", get(list_industries))
        .route("/api/form", get(describe_form))
        .route("/api/evaluate", post(evaluate))
        .route("/health", get(health))
}
