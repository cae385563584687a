//! EvaluateFranchiseHandler - Query handler for evaluating one franchise location.
//!
//! Applies boundary minimums, then runs the pure evaluator against the
//! catalog loaded at startup.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::franchise::{
    EvaluationError, EvaluationInput, EvaluationResult, FranchiseEvaluator, InputLimits,
    ProfileCatalog,
};

/// Query to evaluate a prospective location.
pub type EvaluateFranchiseQuery = EvaluationInput;

/// Handler for franchise evaluations.
pub struct EvaluateFranchiseHandler {
    catalog: Arc<ProfileCatalog>,
    limits: InputLimits,
}

impl EvaluateFranchiseHandler {
    pub fn new(catalog: Arc<ProfileCatalog>, limits: InputLimits) -> Self {
        Self { catalog, limits }
    }

    /// Unknown industries are reported before any numeric validation.
    pub fn handle(&self, query: EvaluateFranchiseQuery) -> Result<EvaluationResult, EvaluationError> {
        let result = FranchiseEvaluator::evaluate_within(&self.catalog, &query, &self.limits)
            .map_err(|e| {
                debug!(industry = %query.industry, "Rejected evaluation: {}", e);
                e
            })?;
        info!(
            industry = %result.industry,
            monthly_net_profit = result.monthly_net_profit,
            payback_months = result.payback_months,
            verdict = result.verdict.label(),
            "Evaluated franchise location"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;
    use crate::domain::franchise::{Verdict, CLOUD_KITCHEN, FITNESS_GYM};

    fn handler() -> EvaluateFranchiseHandler {
        EvaluateFranchiseHandler::new(Arc::new(ProfileCatalog::builtin()), InputLimits::default())
    }

    #[test]
    fn evaluates_known_industry() {
        let query = EvaluationInput::new(CLOUD_KITCHEN, 50_000.0, 1_000.0, 200, 20.0);
        let result = handler().handle(query).unwrap();
        assert_eq!(result.verdict, Verdict::MoneyPrinter);
    }

    #[test]
    fn rejects_setup_cost_below_form_minimum() {
        let query = EvaluationInput::new(FITNESS_GYM, 500.0, 1_000.0, 50, 30.0);
        match handler().handle(query) {
            Err(EvaluationError::InvalidInput(ValidationError::BelowMinimum { field, .. })) => {
                assert_eq!(field, "setup_cost")
            }
            other => panic!("Expected BelowMinimum error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_industry_reported_before_limits() {
        let query = EvaluationInput::new("Space Tourism", 1.0, 0.0, 1, 0.1);
        let err = handler().handle(query).unwrap_err();
        assert_eq!(err, EvaluationError::UnknownIndustry("Space Tourism".to_string()));
    }

    #[test]
    fn custom_limits_are_honoured() {
        let limits = InputLimits {
            min_setup_cost: 10.0,
            min_ticket_size: 0.5,
        };
        let handler = EvaluateFranchiseHandler::new(Arc::new(ProfileCatalog::builtin()), limits);
        let query = EvaluationInput::new(FITNESS_GYM, 500.0, 0.0, 50, 0.75);
        assert!(handler.handle(query).is_ok());
    }
}
