//! TOML file loading shared by the catalog and parameters adapters

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::core::models::ConfigError;

/// Read and deserialize a TOML file, `None` if it doesn't exist
///
/// # Errors
///
/// Returns `ConfigError::Read` or `ConfigError::Parse` naming the file.
pub fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_toml(&content, path).map(Some)
}

/// Deserialize TOML content, attributing errors to `path`
///
/// # Errors
///
/// Returns `ConfigError::Parse` naming the file.
pub fn parse_toml<T: DeserializeOwned>(content: &str, path: &Path) -> Result<T, ConfigError> {
    toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
