//! TOML-based project configuration
//!
//! - [`parser`] - Read and deserialize TOML files
//! - [`catalog`] - `DatasetCatalog` implementation over `catalog.toml`
//! - [`parameters`] - `ParameterSource` implementation over `parameters.toml`
//! - [`writer`] - Starter files and catalog entries

pub mod catalog;
pub mod parameters;
pub mod parser;
pub mod writer;

pub use catalog::{CatalogFile, DatasetEntry, TomlCatalog};
pub use parameters::TomlParameters;
pub use parser::read_toml;
pub use writer::{add_dataset, catalog_template, format_dataset, parameters_template};
