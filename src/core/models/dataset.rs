//! Dataset model
//!
//! A dataset is a named file that lives in one of the data layers.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::Layer;
use crate::paths;

/// A dataset declared in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Catalog name (e.g., "companies")
    pub name: String,

    /// Layer the dataset belongs to
    pub layer: Layer,

    /// File path relative to the project root
    pub filepath: PathBuf,
}

impl Dataset {
    /// Create a dataset, defaulting the file path to `data/<layer>/<name>.csv`
    #[must_use]
    pub fn new(name: impl Into<String>, layer: Layer, filepath: Option<PathBuf>) -> Self {
        let name = name.into();
        let filepath = filepath.unwrap_or_else(|| {
            PathBuf::from(paths::DATA_DIR).join(layer.dir_name()).join(format!("{name}.csv"))
        });
        Self {
            name,
            layer,
            filepath,
        }
    }
}
