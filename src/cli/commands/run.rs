//! Run a registered pipeline

use anyhow::Context;
use datastage::adapters::local::LocalStagingStore;
use datastage::adapters::toml::TomlParameters;
use datastage::core::services::{Importer, find_pipeline, run_pipeline};
use datastage::output::RunResult;

use crate::cli::app::Session;

/// Run `name` with the project's parameters
pub fn run(name: &str, session: &Session) -> anyhow::Result<()> {
    let root = &session.project.root;
    let pipeline = find_pipeline(name)?;
    let params = TomlParameters::load_project(root, &session.project.env)
        .context("failed to load parameters")?;
    let importer = Importer::new(LocalStagingStore::new(), root.clone());

    let nodes = run_pipeline(&pipeline, &params, &importer)
        .with_context(|| format!("pipeline {name} failed"))?;

    RunResult {
        pipeline: name.to_string(),
        root: root.clone(),
        nodes,
    }
    .render(session.mode);
    Ok(())
}
