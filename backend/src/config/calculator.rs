//! Calculator configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::franchise::{InputLimits, DEFAULT_MIN_SETUP_COST, DEFAULT_MIN_TICKET_SIZE};

/// Calculator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorConfig {
    /// Optional YAML file with extra or overriding industry profiles
    pub catalog_path: Option<PathBuf>,

    /// Call-to-action link returned with every evaluation
    #[serde(default = "default_asset_kit_url")]
    pub asset_kit_url: String,

    /// Smallest accepted setup cost
    #[serde(default = "default_min_setup_cost")]
    pub min_setup_cost: f64,

    /// Smallest accepted average ticket size
    #[serde(default = "default_min_ticket_size")]
    pub min_ticket_size: f64,
}

impl CalculatorConfig {
    /// Boundary minimums for evaluation requests
    pub fn input_limits(&self) -> InputLimits {
        InputLimits {
            min_setup_cost: self.min_setup_cost,
            min_ticket_size: self.min_ticket_size,
        }
    }

    /// Validate calculator configuration
    pub fn validate(&self, production: bool) -> Result<(), ValidationError> {
        let url = self.asset_kit_url.as_str();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ValidationError::InvalidAssetKitUrl);
        }
        if production && !url.starts_with("https://") {
            return Err(ValidationError::AssetKitUrlMustBeHttps);
        }
        if !(self.min_setup_cost.is_finite() && self.min_setup_cost > 0.0) {
            return Err(ValidationError::InvalidMinimum("min_setup_cost"));
        }
        if !(self.min_ticket_size.is_finite() && self.min_ticket_size > 0.0) {
            return Err(ValidationError::InvalidMinimum("min_ticket_size"));
        }
        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            asset_kit_url: default_asset_kit_url(),
            min_setup_cost: default_min_setup_cost(),
            min_ticket_size: default_min_ticket_size(),
        }
    }
}

fn default_asset_kit_url() -> String {
    "https://INSERT_LINK_HERE.com".to_string()
}

fn default_min_setup_cost() -> f64 {
    DEFAULT_MIN_SETUP_COST
}

fn default_min_ticket_size() -> f64 {
    DEFAULT_MIN_TICKET_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculator_config_defaults() {
        let config = CalculatorConfig::default();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.asset_kit_url, "https://INSERT_LINK_HERE.com");
        assert_eq!(config.input_limits(), InputLimits::default());
        assert!(config.validate(true).is_ok());
    }

    #[test]
    fn test_rejects_non_http_url() {
        let config = CalculatorConfig {
            asset_kit_url: "ftp://kit".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(false),
            Err(ValidationError::InvalidAssetKitUrl)
        ));
    }

    #[test]
    fn test_production_requires_https() {
        let config = CalculatorConfig {
            asset_kit_url: "http://kit.example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate(false).is_ok());
        assert!(matches!(
            config.validate(true),
            Err(ValidationError::AssetKitUrlMustBeHttps)
        ));
    }

    #[test]
    fn test_rejects_non_positive_minimums() {
        let config = CalculatorConfig {
            min_ticket_size: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(false),
            Err(ValidationError::InvalidMinimum("min_ticket_size"))
        ));
    }

    #[test]
    fn test_deserialization() {
        let json = r#"{
            "catalog_path": "/etc/franchise/industries.yaml",
            "min_setup_cost": 5000
        }"#;
        let config: CalculatorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.catalog_path.as_deref(),
            Some(std::path::Path::new("/etc/franchise/industries.yaml"))
        );
        assert_eq!(config.min_setup_cost, 5000.0);
        assert_eq!(config.min_ticket_size, 1.0);
    }
}
