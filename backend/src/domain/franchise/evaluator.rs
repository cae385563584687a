//! Franchise Economics Evaluator - revenue, cost, payback and verdict for one location.

use serde::Serialize;
use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

use super::input::{EvaluationInput, InputLimits};
use super::narrative::{optimistic_pitch, reality_check, NarrativeFigures};
use super::profile::{IndustryProfile, ProfileCatalog};
use super::verdict::{Signal, Verdict};

/// Trading days in a month. Not calendar-aware.
pub const DAYS_PER_MONTH: f64 = 30.0;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Reasons an evaluation cannot produce a result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    #[error("Unknown industry: {0}")]
    UnknownIndustry(String),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
}

impl EvaluationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvaluationError::UnknownIndustry(_) => ErrorCode::UnknownIndustry,
            EvaluationError::InvalidInput(_) => ErrorCode::ValidationFailed,
        }
    }
}

/// Monthly operating costs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExpenseBreakdown {
    pub rent: f64,
    pub cogs: f64,
    pub labor: f64,
    pub misc: f64,
    pub total: f64,
}

/// Everything computed for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub industry: String,
    pub industry_description: String,
    pub daily_revenue: f64,
    pub monthly_revenue: f64,
    pub annual_revenue: f64,
    pub monthly_expenses: ExpenseBreakdown,
    pub monthly_net_profit: f64,
    pub annual_net_profit: f64,
    pub margin_percent: f64,
    /// `f64::INFINITY` when the location never pays back.
    pub payback_months: f64,
    pub payback_years: f64,
    pub verdict: Verdict,
    pub signal: Signal,
    pub verdict_color: &'static str,
    pub verdict_headline: String,
    pub verdict_subtitle: String,
    pub reality_check: String,
    pub optimistic_pitch: String,
}

impl EvaluationResult {
    /// Payback period, or `None` when it is infinite.
    pub fn finite_payback_months(&self) -> Option<f64> {
        self.payback_months.is_finite().then_some(self.payback_months)
    }
}

/// Stateless evaluator over an injected profile catalog.
pub struct FranchiseEvaluator;

impl FranchiseEvaluator {
    /// Evaluates one location.
    ///
    /// # Errors
    /// - `UnknownIndustry` if `input.industry` is not in `catalog`
    /// - `InvalidInput` if the input fails [`EvaluationInput::validate`]
    pub fn evaluate(
        catalog: &ProfileCatalog,
        input: &EvaluationInput,
    ) -> Result<EvaluationResult, EvaluationError> {
        let profile = Self::resolve(catalog, input)?;
        input.validate()?;
        Ok(Self::compute(profile, input))
    }

    /// Same as [`evaluate`](Self::evaluate), with the stricter boundary
    /// `limits` checked in place of [`EvaluationInput::validate`].
    ///
    /// The industry still resolves first, so `UnknownIndustry` wins over
    /// any limit violation.
    pub fn evaluate_within(
        catalog: &ProfileCatalog,
        input: &EvaluationInput,
        limits: &InputLimits,
    ) -> Result<EvaluationResult, EvaluationError> {
        let profile = Self::resolve(catalog, input)?;
        limits.check(input)?;
        Ok(Self::compute(profile, input))
    }

    fn resolve<'a>(
        catalog: &'a ProfileCatalog,
        input: &EvaluationInput,
    ) -> Result<&'a IndustryProfile, EvaluationError> {
        catalog
            .get(&input.industry)
            .ok_or_else(|| EvaluationError::UnknownIndustry(input.industry.clone()))
    }

    fn compute(profile: &IndustryProfile, input: &EvaluationInput) -> EvaluationResult {
        let daily_revenue = f64::from(input.daily_footfall) * input.ticket_size;
        let monthly_revenue = daily_revenue * DAYS_PER_MONTH;
        let annual_revenue = monthly_revenue * MONTHS_PER_YEAR;

        let cogs = profile.cogs_ratio().of(monthly_revenue);
        let labor = profile.labor_ratio().of(monthly_revenue);
        let misc = profile.misc_ratio().of(monthly_revenue);
        let expenses = ExpenseBreakdown {
            rent: input.monthly_rent,
            cogs,
            labor,
            misc,
            total: input.monthly_rent + cogs + labor + misc,
        };

        let monthly_net_profit = monthly_revenue - expenses.total;
        let annual_net_profit = monthly_net_profit * MONTHS_PER_YEAR;
        let margin_percent = Self::margin_percent(monthly_net_profit, monthly_revenue);

        let payback_months = Self::payback_months(input.setup_cost, monthly_net_profit);
        let payback_years = payback_months / MONTHS_PER_YEAR;

        let verdict = Verdict::classify(monthly_net_profit, payback_months);

        let figures = NarrativeFigures {
            monthly_net_profit,
            annual_revenue,
            margin_percent,
            monthly_rent: input.monthly_rent,
            daily_footfall: input.daily_footfall,
        };

        EvaluationResult {
            industry: profile.name().to_string(),
            industry_description: profile.description().to_string(),
            daily_revenue,
            monthly_revenue,
            annual_revenue,
            monthly_expenses: expenses,
            monthly_net_profit,
            annual_net_profit,
            margin_percent,
            payback_months,
            payback_years,
            verdict,
            signal: verdict.signal(),
            verdict_color: verdict.color(),
            verdict_headline: verdict.headline(),
            verdict_subtitle: verdict.subtitle(payback_months),
            reality_check: reality_check(profile, &figures),
            optimistic_pitch: optimistic_pitch(&figures),
        }
    }

    /// Net profit as a percentage of revenue; zero when there is no revenue.
    pub fn margin_percent(monthly_net_profit: f64, monthly_revenue: f64) -> f64 {
        if monthly_revenue > 0.0 {
            monthly_net_profit / monthly_revenue * 100.0
        } else {
            0.0
        }
    }

    /// Months to recover `setup_cost`; infinite unless profit is positive.
    pub fn payback_months(setup_cost: f64, monthly_net_profit: f64) -> f64 {
        if monthly_net_profit > 0.0 {
            setup_cost / monthly_net_profit
        } else {
            f64::INFINITY
        }
    }
}
