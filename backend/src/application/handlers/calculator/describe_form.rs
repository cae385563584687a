//! DescribeFormHandler - Query handler for the calculator form.
//!
//! Lets a client pre-fill its inputs and enforce the same minimums the
//! evaluation endpoint applies.

use std::sync::Arc;

use crate::domain::franchise::{InputForm, InputLimits, ProfileCatalog};

/// Everything a client needs to render the input form.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorForm {
    /// Selectable industries in display order.
    pub industries: Vec<String>,
    /// Pre-selected industry; `None` when the catalog is empty.
    pub default_industry: Option<String>,
    pub fields: InputForm,
}

/// Handler describing the form under the configured limits.
pub struct DescribeFormHandler {
    catalog: Arc<ProfileCatalog>,
    limits: InputLimits,
}

impl DescribeFormHandler {
    pub fn new(catalog: Arc<ProfileCatalog>, limits: InputLimits) -> Self {
        Self { catalog, limits }
    }

    pub fn handle(&self) -> CalculatorForm {
        let industries: Vec<String> = self
            .catalog
            .names()
            .into_iter()
            .map(str::to_string)
            .collect();
        CalculatorForm {
            default_industry: industries.first().cloned(),
            industries,
            fields: self.limits.form(),
        }
    }
}
