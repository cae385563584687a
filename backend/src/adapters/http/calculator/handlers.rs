//! HTTP handlers for calculator endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use tracing::warn;

use crate::application::handlers::{
    DescribeFormHandler, EvaluateFranchiseHandler, ListIndustriesHandler,
};
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::franchise::{EvaluationError, InputLimits, ProfileCatalog};

use super::dto::{
    EvaluateRequest, EvaluationResponse, ErrorResponse, FormResponse, IndustryResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Calculator API error that implements IntoResponse.
#[derive(Debug)]
pub enum CalculatorApiError {
    Validation(ValidationError),
    UnknownIndustry(String),
}

impl IntoResponse for CalculatorApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            CalculatorApiError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(ErrorCode::ValidationFailed, err.to_string())
                    .with_details(json!({ "field": err.field() })),
            ),
            CalculatorApiError::UnknownIndustry(name) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(
                    ErrorCode::UnknownIndustry,
                    format!("Unknown industry: {}", name),
                ),
            ),
        };
        (status, Json(error)).into_response()
    }
}

impl From<EvaluationError> for CalculatorApiError {
    fn from(error: EvaluationError) -> Self {
        match error {
            EvaluationError::UnknownIndustry(name) => CalculatorApiError::UnknownIndustry(name),
            EvaluationError::InvalidInput(err) => CalculatorApiError::Validation(err),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for calculator endpoints.
///
/// The catalog is loaded once at startup and shared read-only.
#[derive(Clone)]
pub struct CalculatorAppState {
    pub catalog: Arc<ProfileCatalog>,
    pub limits: InputLimits,
    pub asset_kit_url: Arc<str>,
}

impl CalculatorAppState {
    pub fn new(catalog: ProfileCatalog, limits: InputLimits, asset_kit_url: impl Into<Arc<str>>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            limits,
            asset_kit_url: asset_kit_url.into(),
        }
    }

    pub fn evaluate_handler(&self) -> EvaluateFranchiseHandler {
        EvaluateFranchiseHandler::new(self.catalog.clone(), self.limits)
    }

    pub fn list_industries_handler(&self) -> ListIndustriesHandler {
        ListIndustriesHandler::new(self.catalog.clone())
    }

    pub fn describe_form_handler(&self) -> DescribeFormHandler {
        DescribeFormHandler::new(self.catalog.clone(), self.limits)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/industries
///
/// Returns the selectable industries in display order.
pub async fn list_industries(State(state): State<CalculatorAppState>) -> Json<Vec<IndustryResponse>> {
    let profiles = state.list_industries_handler().handle();
    Json(profiles.iter().map(IndustryResponse::from).collect())
}

/// GET /api/form
///
/// Returns form defaults and the minimums `POST /api/evaluate` enforces.
pub async fn describe_form(State(state): State<CalculatorAppState>) -> Json<FormResponse> {
    Json(state.describe_form_handler().handle().into())
}

/// POST /api/evaluate
///
/// Evaluates one location and returns figures, verdict and narratives.
pub async fn evaluate(
    State(state): State<CalculatorAppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<EvaluationResponse>, CalculatorApiError> {
    let result = state
        .evaluate_handler()
        .handle(request.into())
        .map_err(|e| {
            warn!("Evaluation rejected: {}", e);
            CalculatorApiError::from(e)
        })?;

    Ok(Json(EvaluationResponse::from_result(
        result,
        state.asset_kit_url.as_ref(),
    )))
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
