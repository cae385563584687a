//! CostRatio value object (fraction of revenue in [0, 1)).

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// A fraction of revenue consumed by one cost line.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct CostRatio(f64);

impl CostRatio {
    /// Wraps a constant known to be in range. Only for the built-in table.
    pub(crate) const fn from_const(value: f64) -> Self {
        Self(value)
    }

    /// Creates a CostRatio, returning error if outside [0, 1).
    pub fn try_new(field: &str, value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::not_finite(field));
        }
        if !(0.0..1.0).contains(&value) {
            return Err(ValidationError::out_of_range(field, 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the raw fraction.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the ratio scaled to percent.
    pub fn as_percent(&self) -> f64 {
        self.0 * 100.0
    }

    /// Applies the ratio to an amount.
    pub fn of(&self, amount: f64) -> f64 {
        amount * self.0
    }
}

impl TryFrom<f64> for CostRatio {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new("ratio", value)
    }
}

impl From<CostRatio> for f64 {
    fn from(ratio: CostRatio) -> Self {
        ratio.0
    }
}
