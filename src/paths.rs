//! Centralized path definitions for datastage
//!
//! This module provides a single source of truth for all filesystem paths
//! used by datastage.
//!
//! ## Storage Layout
//!
//! ### Per-Project
//!
//! ```text
//! project/
//! ├── conf/
//! │   ├── base/                   # SHARED: committed configuration
//! │   │   ├── catalog.toml
//! │   │   └── parameters.toml
//! │   └── local/                  # LOCAL: overlay, gitignored
//! └── data/
//!     ├── 01_raw/                 # Staged source files
//!     ├── 02_intermediate/
//!     ├── 03_primary/
//!     ├── 04_feature/
//!     └── 05_model_input/
//! ```
//!
//! ### Global (User-Level)
//!
//! ```text
//! ~/.datastage/
//! └── config.toml                 # Import defaults
//! ```

use std::path::{Path, PathBuf};

use crate::core::models::Layer;

// =============================================================================
// Project-level paths
// =============================================================================

/// Data directory name
pub const DATA_DIR: &str = "data";

/// Configuration directory name
pub const CONF_DIR: &str = "conf";

/// Base configuration environment (always loaded)
pub const BASE_ENV: &str = "base";

/// Default overlay environment
pub const DEFAULT_ENV: &str = "local";

/// Dataset catalog filename
pub const CATALOG_FILE: &str = "catalog.toml";

/// Parameters filename
pub const PARAMETERS_FILE: &str = "parameters.toml";

/// Placeholder keeping empty directories in version control
pub const GITKEEP: &str = ".gitkeep";

/// Get the `data/` directory of a project
#[must_use]
pub fn data_dir(root: &Path) -> PathBuf {
    root.join(DATA_DIR)
}

/// Get the directory of a layer (e.g., `data/01_raw`)
#[must_use]
pub fn layer_dir(root: &Path, layer: Layer) -> PathBuf {
    data_dir(root).join(layer.dir_name())
}

/// Get the `conf/<env>/` directory
#[must_use]
pub fn env_dir(root: &Path, env: &str) -> PathBuf {
    root.join(CONF_DIR).join(env)
}

/// Catalog files in load order: base first, then the overlay env
#[must_use]
pub fn catalog_files(root: &Path, env: &str) -> Vec<PathBuf> {
    config_files(root, env, CATALOG_FILE)
}

/// Parameters files in load order: base first, then the overlay env
#[must_use]
pub fn parameters_files(root: &Path, env: &str) -> Vec<PathBuf> {
    config_files(root, env, PARAMETERS_FILE)
}

fn config_files(root: &Path, env: &str, file: &str) -> Vec<PathBuf> {
    let mut files = vec![env_dir(root, BASE_ENV).join(file)];
    if env != BASE_ENV {
        files.push(env_dir(root, env).join(file));
    }
    files
}

/// Find the project root by walking up from `from`
///
/// The root is the first directory containing `conf/base`. Returns `None`
/// when no ancestor qualifies.
#[must_use]
pub fn find_project_root(from: &Path) -> Option<PathBuf> {
    from.ancestors().find(|dir| env_dir(dir, BASE_ENV).is_dir()).map(Path::to_path_buf)
}

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Global config directory name
const GLOBAL_DIR: &str = ".datastage";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global datastage directory.
///
/// Returns `~/.datastage/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.datastage/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
