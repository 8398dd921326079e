//! Stage local files into a data layer

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use log::{debug, error};

use datastage::adapters::local::LocalStagingStore;
use datastage::adapters::toml::TomlCatalog;
use datastage::core::models::{
    Destination, ImportError, ImportRequest, NamingOptions, TransferMode,
};
use datastage::core::ports::DatasetCatalog;
use datastage::core::services::Importer;
use datastage::output::{ImportFailure, ImportResult};

use crate::cli::app::{ImportArgs, Session};

/// Stage every source named on the command line
///
/// All sources are attempted; the command fails if any of them failed.
pub fn import(args: &ImportArgs, session: &Session) -> anyhow::Result<()> {
    let root = &session.project.root;
    let defaults = session.global.import;

    let mut failed = Vec::new();
    let sources = expand_sources(&args.sources, &session.start, &mut failed)?;

    if (args.dataset.is_some() || args.name.is_some()) && sources.len() + failed.len() != 1 {
        anyhow::bail!("--dataset and --name need exactly one source file");
    }

    let destination = match &args.dataset {
        Some(name) => {
            let catalog = TomlCatalog::load_project(root, &session.project.env)
                .context("failed to load catalog")?;
            let dataset = catalog
                .dataset(name)
                .ok_or_else(|| ImportError::UnknownDataset(name.clone()))?;
            Destination::Dataset(dataset)
        },
        None => Destination::Layer {
            layer: args.layer,
            naming: NamingOptions {
                rename: args.name.clone(),
                standardize: args.standardize || defaults.standardize,
                stamp: args.stamp.then(|| Local::now().date_naive()),
            },
        },
    };

    let mode = if args.move_source { TransferMode::Move } else { defaults.mode };
    let on_conflict = args.on_conflict.unwrap_or(defaults.on_conflict);
    let importer = Importer::new(LocalStagingStore::new(), root.clone());

    let requests: Vec<_> = sources
        .into_iter()
        .map(|source| {
            ImportRequest::raw(source).to(destination.clone()).mode(mode).on_conflict(on_conflict)
        })
        .collect();

    let mut staged = Vec::new();
    for (request, result) in requests.iter().zip(importer.import_all(&requests)) {
        match result {
            Ok(file) => staged.push(file),
            Err(e) => {
                error!("{e}");
                failed.push(ImportFailure {
                    source: request.source.clone(),
                    error: e.to_string(),
                });
            },
        }
    }

    let failures = failed.len();
    let total = staged.len() + failures;
    ImportResult {
        success: failures == 0,
        root: root.clone(),
        staged,
        failed,
    }
    .render(session.mode);

    if failures > 0 {
        anyhow::bail!("{failures} of {total} source(s) failed to stage");
    }
    Ok(())
}

/// Resolve sources against `base`, expanding glob patterns
///
/// Patterns that match nothing are recorded as failures.
fn expand_sources(
    sources: &[String],
    base: &Path,
    failed: &mut Vec<ImportFailure>,
) -> anyhow::Result<Vec<PathBuf>> {
    let mut expanded = Vec::new();

    for source in sources {
        if !is_glob(source) {
            expanded.push(base.join(source));
            continue;
        }

        // Only the user's part of the pattern may hold wildcards
        let pattern = if Path::new(source).is_absolute() {
            source.clone()
        } else {
            Path::new(&glob::Pattern::escape(&base.to_string_lossy()))
                .join(source)
                .to_string_lossy()
                .into_owned()
        };
        let mut matched: Vec<PathBuf> = glob::glob(&pattern)
            .with_context(|| format!("invalid pattern: {source}"))?
            .filter_map(Result::ok)
            .filter(|p| p.is_file())
            .collect();
        matched.sort();
        debug!("{source} matched {} file(s)", matched.len());

        if matched.is_empty() {
            failed.push(ImportFailure {
                source: PathBuf::from(source),
                error: format!("no files match pattern: {source}"),
            });
        }
        expanded.extend(matched);
    }

    Ok(expanded)
}

fn is_glob(source: &str) -> bool {
    source.contains(['*', '?', '['])
}
