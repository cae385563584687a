//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Catalog Ports
//!
//! - `ProfileCatalogSource` - Where industry profiles come from (built-in or file)

mod profile_catalog;

pub use profile_catalog::{CatalogError, ProfileCatalogSource};
