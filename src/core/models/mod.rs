//! Domain models for datastage
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Layer`] - A refinement stage (`raw` ... `model_input`)
//! - [`Dataset`] - A named file in a layer
//! - [`ImportRequest`] / [`StagedFile`] - Input and result of staging a file
//! - [`Pipeline`] / [`Node`] - Registered processing steps
//! - [`ImportError`] / [`ConfigError`] - Typed failures

mod dataset;
mod error;
mod import;
mod layer;
mod pipeline;

pub use dataset::Dataset;
pub use error::{ConfigError, ImportError};
pub use import::{
    ConflictPolicy, Destination, ImportOutcome, ImportRequest, NamingOptions, StagedFile,
    TransferMode,
};
pub use layer::Layer;
pub use pipeline::{Node, NodeKind, Pipeline, param_key};
