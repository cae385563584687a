//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `catalog` - Profile catalog sources (built-in, YAML file)
//! - `http` - REST boundary for the calculator

pub mod catalog;
pub mod http;

pub use catalog::{BuiltinCatalogSource, YamlCatalogSource};
pub use http::{app_router, CalculatorAppState};
