//! Core domain logic for datastage
//!
//! This module contains the staging logic with no direct I/O.
//! All filesystem and config access is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Layer, Dataset, ImportRequest, Pipeline)
//! - `services/` - Importer, naming, pipeline runner, CSV summary
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
