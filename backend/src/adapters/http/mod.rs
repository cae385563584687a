//! HTTP adapters - REST API implementations.

pub mod calculator;

use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{ServerConfig, ValidationError};

pub use calculator::{calculator_router, CalculatorAppState};

/// Builds the full application router with tracing, timeout and CORS layers.
///
/// Fails only when `server` lists an unusable CORS origin.
pub fn app_router(
    state: CalculatorAppState,
    server: &ServerConfig,
) -> Result<Router, ValidationError> {
    let origins = server.allowed_origins()?;

    let router = calculator_router()
        .with_state(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http());

    if origins.is_empty() {
        Ok(router)
    } else {
        Ok(router.layer(CorsLayer::new().allow_origin(AllowOrigin::list(origins))))
    }
}
