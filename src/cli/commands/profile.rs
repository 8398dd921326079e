//! Summarize a CSV file

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use datastage::adapters::toml::TomlCatalog;
use datastage::core::ports::DatasetCatalog;
use datastage::core::services::profile_csv;
use datastage::output::ProfileResult;

use crate::cli::app::Session;

/// Profile a catalog dataset or a file path
pub fn profile(target: &str, session: &Session) -> anyhow::Result<()> {
    let root = &session.project.root;
    let catalog = TomlCatalog::load_project(root, &session.project.env)
        .context("failed to load catalog")?;

    let path: PathBuf = match catalog.dataset(target) {
        Some(dataset) => root.join(dataset.filepath),
        None => session.start.join(target),
    };

    let file = File::open(&path).with_context(|| format!("cannot open {}", path.display()))?;
    let profile = profile_csv(BufReader::new(file))
        .with_context(|| format!("cannot profile {}", path.display()))?;

    ProfileResult { path, profile }.render(session.mode);
    Ok(())
}
