//! TOML-based parameters
//!
//! Implements the `ParameterSource` port. Base and overlay files are
//! deep-merged: tables merge key by key, anything else is replaced.

use std::path::{Path, PathBuf};

use toml::{Table, Value};

use crate::core::models::ConfigError;
use crate::core::ports::ParameterSource;
use crate::paths;

use super::parser::{parse_toml, read_toml};

/// Parameters loaded from TOML files
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TomlParameters {
    table: Table,
}

impl TomlParameters {
    /// Load the parameters of a project for an environment
    ///
    /// # Errors
    ///
    /// Returns an error if a parameters file is unreadable or malformed.
    pub fn load_project(root: &Path, env: &str) -> Result<Self, ConfigError> {
        Self::load(&paths::parameters_files(root, env))
    }

    /// Load and deep-merge parameter files in order; missing files are skipped
    ///
    /// # Errors
    ///
    /// Same as [`TomlParameters::load_project`].
    pub fn load(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let mut params = Self::default();
        for path in files {
            if let Some(table) = read_toml::<Table>(path)? {
                log::debug!("loaded parameters {}", path.display());
                deep_merge(&mut params.table, table);
            }
        }
        Ok(params)
    }

    /// Parse parameters from TOML content
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            table: parse_toml(content, Path::new(paths::PARAMETERS_FILE))?,
        })
    }

    /// Overlay another set of parameters onto this one
    pub fn merge(&mut self, overlay: Self) {
        deep_merge(&mut self.table, overlay.table);
    }

    /// Look up a value by dotted key (`import_local.source`)
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        let mut parts = key.split('.');
        let mut current = self.table.get(parts.next()?)?;
        for part in parts {
            current = current.as_table()?.get(part)?;
        }
        Some(current)
    }
}

impl ParameterSource for TomlParameters {
    fn string(&self, key: &str) -> Result<Option<String>, ConfigError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(ConfigError::InvalidParameter {
                key: key.to_string(),
                message: format!("expected a string, found {}", other.type_str()),
            }),
        }
    }
}

fn deep_merge(base: &mut Table, overlay: Table) {
    for (key, value) in overlay {
        match value {
            Value::Table(incoming) => match base.get_mut(&key) {
                Some(Value::Table(existing)) => deep_merge(existing, incoming),
                _ => {
                    base.insert(key, Value::Table(incoming));
                },
            },
            other => {
                base.insert(key, other);
            },
        }
    }
}
