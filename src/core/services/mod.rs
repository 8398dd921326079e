//! Business logic services
//!
//! Orchestration logic over domain models. Filesystem access goes through
//! the [`crate::core::ports`] traits.
//!
//! - [`importer`] - Stage a file into a layer
//! - [`naming`] - Staged file and column naming conventions
//! - [`registry`] - Registered pipelines and the node runner
//! - [`profile`] - CSV summary

pub mod importer;
pub mod naming;
pub mod profile;
pub mod registry;

pub use importer::Importer;
pub use naming::{standardize, standardize_columns, staged_file_name};
pub use profile::{ColumnKind, ColumnProfile, DatasetProfile, ProfileError, profile_csv};
pub use registry::{
    DEFAULT_PIPELINE, IMPORT_DATA_PIPELINE, NodeRun, RunError, find_pipeline, register_pipelines,
    run_pipeline,
};
