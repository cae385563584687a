//! HTTP DTOs for calculator endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::CalculatorForm;
use crate::domain::franchise::{
    EvaluationInput, EvaluationResult, ExpenseBreakdown, IndustryProfile, InputForm, Signal,
    Verdict,
};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to evaluate a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateRequest {
    pub industry: String,
    pub setup_cost: f64,
    pub monthly_rent: f64,
    pub daily_footfall: u32,
    pub ticket_size: f64,
}

impl From<EvaluateRequest> for EvaluationInput {
    fn from(request: EvaluateRequest) -> Self {
        EvaluationInput::new(
            request.industry,
            request.setup_cost,
            request.monthly_rent,
            request.daily_footfall,
            request.ticket_size,
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One selectable industry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryResponse {
    pub name: String,
    pub cogs_ratio: f64,
    pub labor_ratio: f64,
    pub misc_ratio: f64,
    pub description: String,
}

impl From<&IndustryProfile> for IndustryResponse {
    fn from(profile: &IndustryProfile) -> Self {
        Self {
            name: profile.name().to_string(),
            cogs_ratio: profile.cogs_ratio().value(),
            labor_ratio: profile.labor_ratio().value(),
            misc_ratio: profile.misc_ratio().value(),
            description: profile.description().to_string(),
        }
    }
}

/// Form description: industries, pre-filled values and minimums.
#[derive(Debug, Clone, Serialize)]
pub struct FormResponse {
    pub industries: Vec<String>,
    pub default_industry: Option<String>,
    pub fields: InputForm,
}

impl From<CalculatorForm> for FormResponse {
    fn from(form: CalculatorForm) -> Self {
        Self {
            industries: form.industries,
            default_industry: form.default_industry,
            fields: form.fields,
        }
    }
}

/// Verdict block of an evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictResponse {
    pub classification: Verdict,
    pub signal: Signal,
    pub label: String,
    pub color: String,
    pub headline: String,
    pub subtitle: String,
}

/// Evaluation result as sent to the client.
///
/// Payback fields are `null` when the location never pays back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResponse {
    pub industry: String,
    pub industry_description: String,
    pub daily_revenue: f64,
    pub monthly_revenue: f64,
    pub annual_revenue: f64,
    pub monthly_expenses: ExpenseResponse,
    pub monthly_net_profit: f64,
    pub annual_net_profit: f64,
    pub margin_percent: f64,
    pub payback_months: Option<f64>,
    pub payback_years: Option<f64>,
    pub verdict: VerdictResponse,
    pub reality_check: String,
    pub optimistic_pitch: String,
    pub asset_kit_url: String,
}

/// Monthly expense breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseResponse {
    pub rent: f64,
    pub cogs: f64,
    pub labor: f64,
    pub misc: f64,
    pub total: f64,
}

impl From<ExpenseBreakdown> for ExpenseResponse {
    fn from(expenses: ExpenseBreakdown) -> Self {
        Self {
            rent: expenses.rent,
            cogs: expenses.cogs,
            labor: expenses.labor,
            misc: expenses.misc,
            total: expenses.total,
        }
    }
}

impl EvaluationResponse {
    pub fn from_result(result: EvaluationResult, asset_kit_url: impl Into<String>) -> Self {
        let payback_months = result.finite_payback_months();
        Self {
            industry: result.industry,
            industry_description: result.industry_description,
            daily_revenue: result.daily_revenue,
            monthly_revenue: result.monthly_revenue,
            annual_revenue: result.annual_revenue,
            monthly_expenses: result.monthly_expenses.into(),
            monthly_net_profit: result.monthly_net_profit,
            annual_net_profit: result.annual_net_profit,
            margin_percent: result.margin_percent,
            payback_months,
            payback_years: result.payback_years.is_finite().then_some(result.payback_years),
            verdict: VerdictResponse {
                classification: result.verdict,
                signal: result.signal,
                label: result.verdict.label().to_string(),
                color: result.verdict_color.to_string(),
                headline: result.verdict_headline,
                subtitle: result.verdict_subtitle,
            },
            reality_check: result.reality_check,
            optimistic_pitch: result.optimistic_pitch,
            asset_kit_url: asset_kit_url.into(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
