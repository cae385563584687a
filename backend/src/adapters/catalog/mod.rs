//! Catalog adapters - implementations of `ProfileCatalogSource`.

mod builtin;
mod yaml_file;

pub use builtin::BuiltinCatalogSource;
pub use yaml_file::YamlCatalogSource;
