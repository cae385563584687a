//! Franchise Module - Pure domain services for location viability.
//!
//! # Components
//!
//! - `IndustryProfile` / `ProfileCatalog` - Cost ratios per industry, injected into evaluation
//! - `EvaluationInput` / `InputLimits` - Request value object, boundary minimums and form defaults
//! - `FranchiseEvaluator` - Revenue, expenses, profit, payback and verdict
//! - `Verdict` - Ordered payback thresholds (RED / YELLOW / GREEN)
//! - Narratives - Industry reality check and optimistic pitch templates
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. No ports or
//! adapters are needed to evaluate; the catalog is passed in explicitly.

mod evaluator;
mod input;
mod narrative;
mod profile;
mod verdict;

pub use evaluator::{
    EvaluationError, EvaluationResult, ExpenseBreakdown, FranchiseEvaluator, DAYS_PER_MONTH,
    MONTHS_PER_YEAR,
};
pub use input::{
    EvaluationInput, FormField, InputForm, InputLimits, DEFAULT_DAILY_FOOTFALL,
    DEFAULT_MIN_SETUP_COST, DEFAULT_MIN_TICKET_SIZE, DEFAULT_MONTHLY_RENT, DEFAULT_SETUP_COST,
    DEFAULT_TICKET_SIZE,
};
pub use narrative::{format_whole_amount, optimistic_pitch, reality_check, NarrativeFigures};
pub use profile::{
    IndustryProfile, ProfileCatalog, RealityCheck, CAFE_QSR, CLOUD_KITCHEN, FITNESS_GYM,
    RETAIL_GOODS, SERVICE_SALON,
};
pub use verdict::{Signal, Verdict, GRIND_MODE_MONTHS, SLOW_ROI_MONTHS};
