//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be at least {min}, got {actual}")]
    BelowMinimum {
        field: String,
        min: f64,
        actual: f64,
    },

    #[error("Field '{field}' must be in [{min}, {max}), got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' must be a finite number")]
    NotFinite { field: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a below minimum validation error.
    pub fn below_minimum(field: impl Into<String>, min: f64, actual: f64) -> Self {
        ValidationError::BelowMinimum {
            field: field.into(),
            min,
            actual,
        }
    }

    /// Creates a half-open range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a non-finite number validation error.
    pub fn not_finite(field: impl Into<String>) -> Self {
        ValidationError::NotFinite { field: field.into() }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::BelowMinimum { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::NotFinite { field } => field,
        }
    }

    /// Checks that `value` is finite and not below `min`.
    pub fn require_at_least(field: &str, value: f64, min: f64) -> Result<(), Self> {
        if !value.is_finite() {
            return Err(Self::not_finite(field));
        }
        if value < min {
            return Err(Self::below_minimum(field, min, value));
        }
        Ok(())
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Not found errors
    UnknownIndustry,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::UnknownIndustry => "UNKNOWN_INDUSTRY",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("name");
        assert_eq!(format!("{}", err), "Field 'name' cannot be empty");
    }

    #[test]
    fn validation_error_below_minimum_displays_correctly() {
        let err = ValidationError::below_minimum("setup_cost", 1000.0, 500.0);
        assert_eq!(
            format!("{}", err),
            "Field 'setup_cost' must be at least 1000, got 500"
        );
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("cogs_ratio", 0.0, 1.0, 1.5);
        assert_eq!(
            format!("{}", err),
            "Field 'cogs_ratio' must be in [0, 1), got 1.5"
        );
    }

    #[test]
    fn validation_error_reports_field() {
        assert_eq!(ValidationError::not_finite("rent").field(), "rent");
        assert_eq!(
            ValidationError::below_minimum("footfall", 1.0, 0.0).field(),
            "footfall"
        );
    }

    #[test]
    fn require_at_least_accepts_boundary() {
        assert!(ValidationError::require_at_least("rent", 0.0, 0.0).is_ok());
    }

    #[test]
    fn require_at_least_rejects_nan_and_low_values() {
        assert!(matches!(
            ValidationError::require_at_least("rent", f64::NAN, 0.0),
            Err(ValidationError::NotFinite { .. })
        ));
        assert!(matches!(
            ValidationError::require_at_least("rent", -1.0, 0.0),
            Err(ValidationError::BelowMinimum { .. })
        ));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::UnknownIndustry), "UNKNOWN_INDUSTRY");
        assert_eq!(format!("{}", ErrorCode::ValidationFailed), "VALIDATION_FAILED");
    }
}
