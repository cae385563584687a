//! ListIndustriesHandler - Query handler for the selectable industry profiles.

use std::sync::Arc;

use crate::domain::franchise::{IndustryProfile, ProfileCatalog};

/// Handler returning the catalog in display order.
pub struct ListIndustriesHandler {
    catalog: Arc<ProfileCatalog>,
}

impl ListIndustriesHandler {
    pub fn new(catalog: Arc<ProfileCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self) -> Vec<IndustryProfile> {
        self.catalog.iter().cloned().collect()
    }
}
