//! Layer inventory: staged files and sizes per data layer

use std::path::Path;

use serde::Serialize;
use walkdir::WalkDir;

use super::store::PARTIAL_SUFFIX;
use crate::core::models::Layer;
use crate::paths;

/// Files found in one layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerInventory {
    /// The layer
    pub layer: Layer,
    /// Layer directory relative to the project root
    pub dir: String,
    /// Whether the directory exists
    pub exists: bool,
    /// Staged file paths relative to the layer directory, sorted
    pub files: Vec<String>,
    /// Total size in bytes
    pub bytes: u64,
}

/// Inventory every layer of the project at `root`
pub fn inventory(root: &Path) -> anyhow::Result<Vec<LayerInventory>> {
    Layer::ALL.into_iter().map(|layer| inventory_layer(root, layer)).collect()
}

/// Inventory one layer, skipping `.gitkeep` and in-flight `.partial` files
pub fn inventory_layer(root: &Path, layer: Layer) -> anyhow::Result<LayerInventory> {
    let dir = paths::layer_dir(root, layer);
    let mut result = LayerInventory {
        layer,
        dir: format!("{}/{}", paths::DATA_DIR, layer.dir_name()),
        exists: dir.is_dir(),
        files: Vec::new(),
        bytes: 0,
    };
    if !result.exists {
        return Ok(result);
    }

    for entry in WalkDir::new(&dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name == paths::GITKEEP || name.ends_with(PARTIAL_SUFFIX) {
            continue;
        }
        result.bytes += entry.metadata()?.len();
        let relative = entry.path().strip_prefix(&dir).unwrap_or_else(|_| entry.path());
        result.files.push(relative.to_string_lossy().replace('\\', "/"));
    }

    Ok(result)
}
