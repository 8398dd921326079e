//! Configuration management
//!
//! Two layers of configuration:
//!
//! - [`GlobalConfig`] - user preferences at `~/.datastage/config.toml`
//!   (default conflict policy, transfer mode, naming, environment)
//! - [`ProjectContext`] - the resolved project root and config environment
//!   for one invocation

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::models::{ConflictPolicy, TransferMode};
use crate::paths;

/// Environment variable selecting the config environment
pub const ENV_VAR: &str = "DATASTAGE_ENV";

/// Global datastage configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Defaults for `import`
    #[serde(default)]
    pub import: ImportDefaults,
    /// Default config environment (overridden by flag or `DATASTAGE_ENV`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<String>,
}

/// Import defaults applied when no flag is given
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDefaults {
    /// Conflict policy
    #[serde(default)]
    pub on_conflict: ConflictPolicy,
    /// Transfer mode
    #[serde(default)]
    pub mode: TransferMode,
    /// Standardize staged file names
    #[serde(default)]
    pub standardize: bool,
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or default if missing or unreadable
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from a specific file, or default if missing or unreadable
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path).map(|content| toml::from_str(&content)) {
            Ok(Ok(config)) => config,
            Ok(Err(e)) => {
                log::warn!("ignoring invalid config {}: {e}", path.display());
                Self::default()
            },
            Err(e) => {
                log::warn!("ignoring unreadable config {}: {e}", path.display());
                Self::default()
            },
        }
    }
}

/// Resolved project location and configuration environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    /// Project root (contains `conf/` and `data/`)
    pub root: PathBuf,
    /// Overlay environment under `conf/`
    pub env: String,
    /// Whether `conf/base` was found at the root
    pub initialized: bool,
}

impl ProjectContext {
    /// Resolve the project for an invocation
    ///
    /// The root is the nearest ancestor of `start` holding `conf/base`, or
    /// `start` itself. The environment is the first of `env_flag`,
    /// `DATASTAGE_ENV`, the global config, and `local`.
    #[must_use]
    pub fn resolve(start: &Path, env_flag: Option<&str>, global: &GlobalConfig) -> Self {
        let found = paths::find_project_root(start);
        let initialized = found.is_some();
        let root = found.unwrap_or_else(|| start.to_path_buf());

        let env = env_flag
            .map(String::from)
            .or_else(|| std::env::var(ENV_VAR).ok().filter(|v| !v.trim().is_empty()))
            .or_else(|| global.env.clone())
            .unwrap_or_else(|| paths::DEFAULT_ENV.to_string());

        Self {
            root,
            env,
            initialized,
        }
    }
}
