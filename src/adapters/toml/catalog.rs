//! TOML-based dataset catalog
//!
//! Implements the `DatasetCatalog` port from `conf/base/catalog.toml` and an
//! optional `conf/<env>/catalog.toml` overlay. Overlay entries replace base
//! entries with the same name.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::models::{ConfigError, Dataset, Layer};
use crate::core::ports::DatasetCatalog;
use crate::paths;

use super::parser::{parse_toml, read_toml};

/// A catalog.toml file structure
#[derive(Debug, Default, Deserialize)]
pub struct CatalogFile {
    /// Datasets keyed by name
    #[serde(default)]
    pub datasets: BTreeMap<String, DatasetEntry>,
}

/// A dataset entry in catalog.toml
#[derive(Debug, Deserialize)]
pub struct DatasetEntry {
    /// Layer name (`raw`, `01_raw`, ...)
    #[serde(default = "default_layer")]
    pub layer: String,

    /// File path relative to the project root
    #[serde(default)]
    pub filepath: Option<PathBuf>,
}

fn default_layer() -> String {
    Layer::Raw.to_string()
}

/// Catalog loaded from TOML files
#[derive(Debug, Clone, Default)]
pub struct TomlCatalog {
    datasets: BTreeMap<String, Dataset>,
}

impl TomlCatalog {
    /// Load the catalog of a project for an environment
    ///
    /// # Errors
    ///
    /// Returns an error if a catalog file is unreadable, malformed, or names
    /// an unknown layer.
    pub fn load_project(root: &Path, env: &str) -> Result<Self, ConfigError> {
        Self::load(&paths::catalog_files(root, env))
    }

    /// Load and merge catalog files in order; missing files are skipped
    ///
    /// # Errors
    ///
    /// Same as [`TomlCatalog::load_project`].
    pub fn load(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let mut catalog = Self::default();
        for path in files {
            if let Some(file) = read_toml::<CatalogFile>(path)? {
                log::debug!("loaded catalog {}", path.display());
                catalog.merge(file)?;
            }
        }
        Ok(catalog)
    }

    /// Parse a single catalog from TOML content
    ///
    /// # Errors
    ///
    /// Returns an error for malformed TOML or an unknown layer.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut catalog = Self::default();
        catalog.merge(parse_toml(content, Path::new(paths::CATALOG_FILE))?)?;
        Ok(catalog)
    }

    fn merge(&mut self, file: CatalogFile) -> Result<(), ConfigError> {
        for (name, entry) in file.datasets {
            let layer: Layer = entry.layer.parse().map_err(|message| ConfigError::InvalidLayer {
                dataset: name.clone(),
                message,
            })?;
            let dataset = Dataset::new(name.clone(), layer, entry.filepath);
            self.datasets.insert(name, dataset);
        }
        Ok(())
    }

    /// Number of datasets
    #[must_use]
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

impl DatasetCatalog for TomlCatalog {
    fn datasets(&self) -> Vec<Dataset> {
        self.datasets.values().cloned().collect()
    }

    fn dataset(&self, name: &str) -> Option<Dataset> {
        self.datasets.get(name).cloned()
    }
}
