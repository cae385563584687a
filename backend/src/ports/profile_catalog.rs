//! ProfileCatalogSource port for loading industry profiles at startup

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::domain::franchise::ProfileCatalog;

/// Errors that can occur while loading a profile catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file not found
    #[error("Catalog not found: {0}")]
    NotFound(String),

    /// IO error reading the catalog
    #[error("IO error: {0}")]
    IoError(String),

    /// Catalog document could not be parsed
    #[error("Malformed catalog: {0}")]
    Malformed(String),

    /// An entry failed profile validation
    #[error("Invalid profile '{name}': {source}")]
    InvalidProfile {
        name: String,
        #[source]
        source: ValidationError,
    },
}

/// Source of the industry profile catalog used for evaluations
#[async_trait]
pub trait ProfileCatalogSource: Send + Sync {
    /// Load the complete catalog
    async fn load(&self) -> Result<ProfileCatalog, CatalogError>;

    /// Human-readable origin, for logs
    fn describe(&self) -> String;
}
