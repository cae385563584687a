//! Built-in catalog source - the five fixed industry profiles

use async_trait::async_trait;

use crate::domain::franchise::ProfileCatalog;
use crate::ports::{CatalogError, ProfileCatalogSource};

/// Serves [`ProfileCatalog::builtin`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalogSource;

#[async_trait]
impl ProfileCatalogSource for BuiltinCatalogSource {
    async fn load(&self) -> Result<ProfileCatalog, CatalogError> {
        Ok(ProfileCatalog::builtin())
    }

    fn describe(&self) -> String {
        "built-in profiles".to_string()
    }
}
