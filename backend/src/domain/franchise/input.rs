//! Evaluation input value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::evaluator::{DAYS_PER_MONTH, MONTHS_PER_YEAR};

/// Smallest setup cost the calculator form accepts.
pub const DEFAULT_MIN_SETUP_COST: f64 = 1000.0;

/// Smallest average ticket size the calculator form accepts.
pub const DEFAULT_MIN_TICKET_SIZE: f64 = 1.0;

// Values the form is pre-filled with.
pub const DEFAULT_SETUP_COST: f64 = 150_000.0;
pub const DEFAULT_MONTHLY_RENT: f64 = 4_000.0;
pub const DEFAULT_DAILY_FOOTFALL: u32 = 80;
pub const DEFAULT_TICKET_SIZE: f64 = 15.0;

/// One calculation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationInput {
    /// Industry name; must resolve in the catalog.
    pub industry: String,
    /// One-off cost to open the location.
    pub setup_cost: f64,
    /// Fixed monthly rent.
    pub monthly_rent: f64,
    /// Paying customers per day.
    pub daily_footfall: u32,
    /// Average spend per customer.
    pub ticket_size: f64,
}

impl EvaluationInput {
    pub fn new(
        industry: impl Into<String>,
        setup_cost: f64,
        monthly_rent: f64,
        daily_footfall: u32,
        ticket_size: f64,
    ) -> Self {
        Self {
            industry: industry.into(),
            setup_cost,
            monthly_rent,
            daily_footfall,
            ticket_size,
        }
    }

    /// Rejects values that would make the arithmetic degenerate.
    ///
    /// Costs must be finite and non-negative, footfall at least one and
    /// ticket size strictly positive. Annual revenue and annual rent plus
    /// revenue must also stay finite, so profit is never NaN.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::require_at_least("setup_cost", self.setup_cost, 0.0)?;
        ValidationError::require_at_least("monthly_rent", self.monthly_rent, 0.0)?;
        if self.daily_footfall == 0 {
            return Err(ValidationError::below_minimum("daily_footfall", 1.0, 0.0));
        }
        if !self.ticket_size.is_finite() {
            return Err(ValidationError::not_finite("ticket_size"));
        }
        if self.ticket_size <= 0.0 {
            return Err(ValidationError::below_minimum(
                "ticket_size",
                f64::MIN_POSITIVE,
                self.ticket_size,
            ));
        }

        let monthly_revenue = f64::from(self.daily_footfall) * self.ticket_size * DAYS_PER_MONTH;
        if !(monthly_revenue * MONTHS_PER_YEAR).is_finite() {
            return Err(ValidationError::not_finite("ticket_size"));
        }
        if !((self.monthly_rent + monthly_revenue) * MONTHS_PER_YEAR).is_finite() {
            return Err(ValidationError::not_finite("monthly_rent"));
        }
        Ok(())
    }
}

/// Minimums enforced at the input boundary, stricter than [`EvaluationInput::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLimits {
    pub min_setup_cost: f64,
    pub min_ticket_size: f64,
}

impl InputLimits {
    /// Checks the form minimums, then the evaluator's own preconditions.
    pub fn check(&self, input: &EvaluationInput) -> Result<(), ValidationError> {
        ValidationError::require_at_least("setup_cost", input.setup_cost, self.min_setup_cost)?;
        ValidationError::require_at_least("ticket_size", input.ticket_size, self.min_ticket_size)?;
        input.validate()
    }
}

impl InputLimits {
    /// Describes the input form under these limits.
    ///
    /// A default below its configured minimum is raised to the minimum.
    pub fn form(&self) -> InputForm {
        InputForm {
            setup_cost: FormField::new(self.min_setup_cost, DEFAULT_SETUP_COST, 1_000.0),
            monthly_rent: FormField::new(0.0, DEFAULT_MONTHLY_RENT, 100.0),
            daily_footfall: FormField::new(1.0, f64::from(DEFAULT_DAILY_FOOTFALL), 1.0),
            ticket_size: FormField::new(self.min_ticket_size, DEFAULT_TICKET_SIZE, 0.5),
        }
    }
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_setup_cost: DEFAULT_MIN_SETUP_COST,
            min_ticket_size: DEFAULT_MIN_TICKET_SIZE,
        }
    }
}

/// Lower bound, starting value and increment of one numeric form field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormField {
    pub min: f64,
    pub default: f64,
    pub step: f64,
}

impl FormField {
    fn new(min: f64, default: f64, step: f64) -> Self {
        Self {
            min,
            default: default.max(min),
            step,
        }
    }
}

/// The numeric fields a client collects before calling the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InputForm {
    pub setup_cost: FormField,
    pub monthly_rent: FormField,
    pub daily_footfall: FormField,
    pub ticket_size: FormField,
}
