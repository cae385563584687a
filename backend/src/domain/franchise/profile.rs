//! Industry cost profiles and the catalog that maps names to them.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CostRatio, ValidationError};

/// Built-in profile name for cafés and quick-service restaurants.
pub const CAFE_QSR: &str = "F&B (Cafe/QSR)";
/// Built-in profile name for gyms.
pub const FITNESS_GYM: &str = "Fitness/Gym";
/// Built-in profile name for clothing and goods retail.
pub const RETAIL_GOODS: &str = "Retail (Clothing/Goods)";
/// Built-in profile name for delivery-only kitchens.
pub const CLOUD_KITCHEN: &str = "Cloud Kitchen";
/// Built-in profile name for salons and spas.
pub const SERVICE_SALON: &str = "Service (Salon/Spa)";

/// Which pessimistic narrative a profile gets.
///
/// Every industry maps to exactly one variant; `FootfallDependence` is the
/// generic template used for anything without a bespoke one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RealityCheck {
    FoodCost,
    FixedRent,
    AggregatorCommission,
    LaborRetention,
    #[default]
    FootfallDependence,
}

/// Cost structure of one industry, expressed as fractions of revenue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryProfile {
    name: String,
    cogs_ratio: CostRatio,
    labor_ratio: CostRatio,
    misc_ratio: CostRatio,
    description: String,
    reality_check: RealityCheck,
}

impl IndustryProfile {
    /// Creates a profile, validating the name and each ratio.
    pub fn new(
        name: impl Into<String>,
        cogs_ratio: f64,
        labor_ratio: f64,
        misc_ratio: f64,
        description: impl Into<String>,
        reality_check: RealityCheck,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }

        Ok(Self {
            name,
            cogs_ratio: CostRatio::try_new("cogs_ratio", cogs_ratio)?,
            labor_ratio: CostRatio::try_new("labor_ratio", labor_ratio)?,
            misc_ratio: CostRatio::try_new("misc_ratio", misc_ratio)?,
            description: description.into(),
            reality_check,
        })
    }

    fn builtin(
        name: &str,
        cogs: f64,
        labor: f64,
        misc: f64,
        description: &str,
        reality_check: RealityCheck,
    ) -> Self {
        Self {
            name: name.to_string(),
            cogs_ratio: CostRatio::from_const(cogs),
            labor_ratio: CostRatio::from_const(labor),
            misc_ratio: CostRatio::from_const(misc),
            description: description.to_string(),
            reality_check,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cogs_ratio(&self) -> CostRatio {
        self.cogs_ratio
    }

    pub fn labor_ratio(&self) -> CostRatio {
        self.labor_ratio
    }

    pub fn misc_ratio(&self) -> CostRatio {
        self.misc_ratio
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn reality_check(&self) -> RealityCheck {
        self.reality_check
    }

    /// Sum of the three variable cost ratios. May exceed 1.
    pub fn combined_ratio(&self) -> f64 {
        self.cogs_ratio.value() + self.labor_ratio.value() + self.misc_ratio.value()
    }
}

static BUILTIN_PROFILES: Lazy<Vec<IndustryProfile>> = Lazy::new(|| {
    vec![
        IndustryProfile::builtin(
            CAFE_QSR,
            0.32,
            0.25,
            0.15,
            "High volume, high waste, labor intensive.",
            RealityCheck::FoodCost,
        ),
        IndustryProfile::builtin(
            FITNESS_GYM,
            0.05,
            0.20,
            0.25,
            "Recurring revenue, high rent, high equipment cost.",
            RealityCheck::FixedRent,
        ),
        IndustryProfile::builtin(
            RETAIL_GOODS,
            0.40,
            0.15,
            0.10,
            "Inventory management is the killer.",
            RealityCheck::FootfallDependence,
        ),
        IndustryProfile::builtin(
            CLOUD_KITCHEN,
            0.35,
            0.20,
            0.30,
            "Low rent, but the apps take your margin.",
            RealityCheck::AggregatorCommission,
        ),
        IndustryProfile::builtin(
            SERVICE_SALON,
            0.10,
            0.45,
            0.10,
            "Staff retention is your biggest risk.",
            RealityCheck::LaborRetention,
        ),
    ]
});

/// Ordered mapping from industry name to profile.
///
/// Order is insertion order, which is the order a form should offer them in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProfileCatalog {
    profiles: Vec<IndustryProfile>,
}

impl ProfileCatalog {
    /// The five built-in industry profiles.
    pub fn builtin() -> Self {
        Self {
            profiles: BUILTIN_PROFILES.clone(),
        }
    }

    /// A catalog with no profiles.
    pub fn empty() -> Self {
        Self { profiles: Vec::new() }
    }

    /// Adds a profile, replacing any existing profile with the same name in place.
    pub fn insert(&mut self, profile: IndustryProfile) {
        match self.profiles.iter_mut().find(|p| p.name == profile.name) {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
    }

    /// Returns this catalog with `profiles` merged in.
    pub fn with_profiles(mut self, profiles: impl IntoIterator<Item = IndustryProfile>) -> Self {
        for profile in profiles {
            self.insert(profile);
        }
        self
    }

    /// Looks up a profile by exact name.
    pub fn get(&self, name: &str) -> Option<&IndustryProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndustryProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for ProfileCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
