//! Catalog management command - list and add datasets

use anyhow::Context;
use datastage::adapters::toml::{TomlCatalog, add_dataset};
use datastage::core::models::Dataset;
use datastage::core::ports::DatasetCatalog;
use datastage::output::{CatalogListResult, OperationResult, display_path};

use crate::cli::app::{CatalogAction, Session};

/// Handle catalog subcommands
pub fn catalog(action: CatalogAction, session: &Session) -> anyhow::Result<()> {
    let root = &session.project.root;
    match action {
        CatalogAction::List => {
            let catalog = TomlCatalog::load_project(root, &session.project.env)
                .context("failed to load catalog")?;
            CatalogListResult {
                datasets: catalog.datasets(),
            }
            .render(session.mode);
        },
        CatalogAction::Add {
            name,
            layer,
            filepath,
        } => {
            let dataset = Dataset::new(name, layer, filepath);
            let path = add_dataset(root, &dataset)?;
            OperationResult {
                success: true,
                message: format!(
                    "Added dataset {} [{}] -> {}\n  in {}",
                    dataset.name,
                    dataset.layer,
                    dataset.filepath.display(),
                    display_path(&path, root)
                ),
            }
            .render(session.mode);
        },
    }
    Ok(())
}
