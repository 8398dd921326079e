//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core logic and the
//! filesystem and configuration files.
//!
//! Implementations live in the `adapters` module.

mod catalog;
mod parameters;
mod staging_store;

pub use catalog::DatasetCatalog;
pub use parameters::ParameterSource;
pub use staging_store::StagingStore;
