//! TOML writer for catalog and parameters files
//!
//! Produces the starter files written by `init` and appends catalog entries.

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::{ConfigError, Dataset, Layer};
use crate::core::ports::DatasetCatalog;
use crate::paths;

use super::catalog::TomlCatalog;

/// Starter `catalog.toml`
#[must_use]
pub fn catalog_template() -> String {
    let layers: Vec<_> = Layer::ALL.iter().map(|l| l.as_str()).collect();
    format!(
        r#"# Dataset catalog
#
# Layers: {}
# filepath defaults to data/<layer dir>/<name>.csv
#
# Example (uncomment to use):
# [datasets.companies]
# layer = "raw"
# filepath = "data/01_raw/companies.csv"
"#,
        layers.join(", ")
    )
}

/// Starter `parameters.toml`
#[must_use]
pub fn parameters_template() -> String {
    r#"# Parameters for registered pipelines
#
# Paths are relative to the project root.

[import_local]
# source = "path/to/file.csv"
destination = "data/01_raw/dataset.csv"
on_conflict = "overwrite"  # overwrite, skip, error
mode = "copy"              # copy, move
"#
    .to_string()
}

/// Format one catalog entry
#[must_use]
pub fn format_dataset(dataset: &Dataset) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[datasets.{}]", toml_key(&dataset.name));
    let _ = writeln!(out, "layer = \"{}\"", dataset.layer);
    let _ = writeln!(
        out,
        "filepath = {}",
        toml::Value::String(dataset.filepath.to_string_lossy().replace('\\', "/"))
    );
    out
}

/// Append a dataset to `conf/base/catalog.toml`, creating the file if needed
///
/// Returns the path of the catalog file written.
///
/// # Errors
///
/// Fails if the dataset name already exists in the base catalog, or if the
/// file cannot be read or written.
pub fn add_dataset(root: &Path, dataset: &Dataset) -> anyhow::Result<PathBuf> {
    let path = paths::env_dir(root, paths::BASE_ENV).join(paths::CATALOG_FILE);
    let existing = TomlCatalog::load(std::slice::from_ref(&path))?;
    if existing.dataset(&dataset.name).is_some() {
        anyhow::bail!("dataset already in catalog: {}", dataset.name);
    }

    let mut content = if path.exists() {
        fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?
    } else {
        catalog_template()
    };
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content.push('\n');
    content.push_str(&format_dataset(dataset));

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(&path, content)?;
    Ok(path)
}

fn toml_key(name: &str) -> String {
    if !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        name.to_string()
    } else {
        toml::Value::String(name.to_string()).to_string()
    }
}
