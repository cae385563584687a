//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod calculator;

pub use calculator::{
    CalculatorForm, DescribeFormHandler, EvaluateFranchiseHandler, EvaluateFranchiseQuery,
    ListIndustriesHandler,
};
