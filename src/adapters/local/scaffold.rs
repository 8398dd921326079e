//! Project scaffold
//!
//! Creates the data layer directories and starter configuration files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::adapters::toml::{catalog_template, parameters_template};
use crate::core::models::Layer;
use crate::paths;

/// Lines `init` makes sure are present in `.gitignore`
pub const GITIGNORE_ENTRIES: [&str; 3] = ["data/**/*", "!data/**/.gitkeep", "conf/local/**"];

/// Files and directories touched by `init`
#[derive(Debug, Default, Serialize)]
pub struct ScaffoldReport {
    /// Paths created or rewritten
    pub created: Vec<PathBuf>,
    /// Config files left as they were
    pub kept: Vec<PathBuf>,
}

/// Scaffold a project at `root`
///
/// Existing config files are kept unless `force` is set. Directories and
/// `.gitignore` entries are only ever added.
pub fn init_project(root: &Path, force: bool) -> anyhow::Result<ScaffoldReport> {
    let mut report = ScaffoldReport::default();

    for layer in Layer::ALL {
        let dir = paths::layer_dir(root, layer);
        ensure_dir_with_gitkeep(&dir, &mut report)?;
    }
    ensure_dir_with_gitkeep(&paths::env_dir(root, paths::DEFAULT_ENV), &mut report)?;

    let base = paths::env_dir(root, paths::BASE_ENV);
    fs::create_dir_all(&base)?;
    write_config(&base.join(paths::CATALOG_FILE), &catalog_template(), force, &mut report)?;
    write_config(&base.join(paths::PARAMETERS_FILE), &parameters_template(), force, &mut report)?;

    let gitignore = root.join(".gitignore");
    if update_gitignore(&gitignore)? {
        report.created.push(gitignore);
    }

    Ok(report)
}

fn ensure_dir_with_gitkeep(dir: &Path, report: &mut ScaffoldReport) -> anyhow::Result<()> {
    if !dir.is_dir() {
        fs::create_dir_all(dir)?;
        report.created.push(dir.to_path_buf());
    }
    let keep = dir.join(paths::GITKEEP);
    if !keep.exists() {
        fs::write(&keep, "")?;
    }
    Ok(())
}

fn write_config(
    path: &Path,
    content: &str,
    force: bool,
    report: &mut ScaffoldReport,
) -> anyhow::Result<()> {
    if path.exists() && !force {
        report.kept.push(path.to_path_buf());
        return Ok(());
    }
    fs::write(path, content)?;
    report.created.push(path.to_path_buf());
    Ok(())
}

/// Append missing entries to `.gitignore`; returns whether it changed
fn update_gitignore(path: &Path) -> anyhow::Result<bool> {
    let existing = if path.exists() { fs::read_to_string(path)? } else { String::new() };
    let missing: Vec<_> = GITIGNORE_ENTRIES
        .iter()
        .filter(|entry| !existing.lines().any(|line| line.trim() == **entry))
        .collect();
    if missing.is_empty() {
        return Ok(false);
    }

    let mut content = existing;
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str("# datastage\n");
    for entry in missing {
        content.push_str(entry);
        content.push('\n');
    }
    fs::write(path, content)?;
    Ok(true)
}
