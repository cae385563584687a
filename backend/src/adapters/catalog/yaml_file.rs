//! YAML file catalog source for custom industry profiles
//!
//! ```yaml
//! include_builtin: true        # optional, defaults to true
//! industries:
//!   - name: Bakery
//!     cogs_ratio: 0.30
//!     labor_ratio: 0.22
//!     misc_ratio: 0.12
//!     description: Early mornings, thin margins.
//!     reality_check: food_cost # optional, defaults to footfall_dependence
//! ```
//!
//! Entries replace built-in profiles with the same name and are appended otherwise.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::domain::franchise::{IndustryProfile, ProfileCatalog, RealityCheck};
use crate::ports::{CatalogError, ProfileCatalogSource};

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default = "default_include_builtin")]
    include_builtin: bool,
    #[serde(default)]
    industries: Vec<ProfileEntry>,
}

#[derive(Debug, Deserialize)]
struct ProfileEntry {
    name: String,
    cogs_ratio: f64,
    labor_ratio: f64,
    misc_ratio: f64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    reality_check: RealityCheck,
}

fn default_include_builtin() -> bool {
    true
}

/// Reads profiles from a YAML document on disk
pub struct YamlCatalogSource {
    path: PathBuf,
}

impl YamlCatalogSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Parse a catalog document already in memory
    pub fn parse(content: &str) -> Result<ProfileCatalog, CatalogError> {
        let document: CatalogDocument =
            serde_yaml::from_str(content).map_err(|e| CatalogError::Malformed(e.to_string()))?;

        let base = if document.include_builtin {
            ProfileCatalog::builtin()
        } else {
            ProfileCatalog::empty()
        };

        let profiles = document
            .industries
            .into_iter()
            .map(|entry| {
                IndustryProfile::new(
                    entry.name.clone(),
                    entry.cogs_ratio,
                    entry.labor_ratio,
                    entry.misc_ratio,
                    entry.description,
                    entry.reality_check,
                )
                .map_err(|source| CatalogError::InvalidProfile {
                    name: entry.name,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let catalog = base.with_profiles(profiles);
        if catalog.is_empty() {
            return Err(CatalogError::Malformed(
                "catalog defines no industries".to_string(),
            ));
        }
        Ok(catalog)
    }
}

#[async_trait]
impl ProfileCatalogSource for YamlCatalogSource {
    async fn load(&self) -> Result<ProfileCatalog, CatalogError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CatalogError::NotFound(self.path.display().to_string())
            } else {
                CatalogError::IoError(format!("Failed to read catalog: {}", e))
            }
        })?;

        let catalog = Self::parse(&content)?;
        debug!(
            "Loaded {} industry profiles from {}",
            catalog.len(),
            self.path.display()
        );
        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!("catalog file {}", self.path.display())
    }
}
