//! Calculator handlers - evaluation, industry listing and form description.

mod describe_form;
mod evaluate_franchise;
mod list_industries;

pub use describe_form::{CalculatorForm, DescribeFormHandler};
pub use evaluate_franchise::{EvaluateFranchiseHandler, EvaluateFranchiseQuery};
pub use list_industries::ListIndustriesHandler;
