//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `local/` - Filesystem staging, scaffold, layer inventory
//! - `toml/` - Catalog and parameters files

pub mod local;
pub mod toml;
