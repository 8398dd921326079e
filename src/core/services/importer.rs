//! Local file importer
//!
//! Decides where a source file lands and whether it should be written,
//! then delegates the byte transfer to a [`StagingStore`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::core::models::{
    ConflictPolicy, Destination, ImportError, ImportOutcome, ImportRequest, StagedFile,
};
use crate::core::ports::StagingStore;
use crate::paths;

use super::naming::staged_file_name;

/// Stages files into a project's data layers
#[derive(Debug, Clone)]
pub struct Importer<S> {
    store: S,
    root: PathBuf,
}

impl<S: StagingStore> Importer<S> {
    /// Create an importer for the project at `root`
    #[must_use]
    pub fn new(store: S, root: impl Into<PathBuf>) -> Self {
        Self {
            store,
            root: root.into(),
        }
    }

    /// Project root destinations are resolved against
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Store files are read from and written to
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Resolve the absolute destination path of a request
    ///
    /// # Errors
    ///
    /// Returns `ImportError::InvalidName` if the naming convention yields an
    /// unusable file name.
    pub fn resolve_destination(&self, request: &ImportRequest) -> Result<PathBuf, ImportError> {
        match &request.destination {
            Destination::Layer { layer, naming } => {
                let name = staged_file_name(&request.source, naming)?;
                Ok(paths::layer_dir(&self.root, *layer).join(name))
            },
            Destination::Dataset(dataset) => Ok(self.root.join(&dataset.filepath)),
            Destination::Path(path) => Ok(self.root.join(path)),
        }
    }

    /// Stage one file
    ///
    /// # Errors
    ///
    /// - `SourceNotFound` / `SourceNotAFile` / `SourceUnreadable` if the
    ///   source can't be used; nothing is written.
    /// - `AlreadyExists` if the destination exists under `ConflictPolicy::Error`.
    /// - `DestinationNotWritable` if the layer directory or file can't be written.
    pub fn import(&self, request: &ImportRequest) -> Result<StagedFile, ImportError> {
        let bytes = self.store.inspect_source(&request.source)?;
        let destination = self.resolve_destination(request)?;
        debug!("staging {} -> {}", request.source.display(), destination.display());

        let staged = |outcome| StagedFile {
            source: request.source.clone(),
            destination: destination.clone(),
            bytes,
            outcome,
            mode: request.mode,
        };

        if self.store.same_file(&request.source, &destination) {
            debug!("source is already staged at {}", destination.display());
            return Ok(staged(ImportOutcome::Unchanged));
        }

        let outcome = if self.store.exists(&destination) {
            match request.on_conflict {
                ConflictPolicy::Error => {
                    return Err(ImportError::AlreadyExists(destination.clone()));
                },
                ConflictPolicy::Skip => {
                    debug!("destination exists, skipping {}", destination.display());
                    return Ok(staged(ImportOutcome::Skipped));
                },
                ConflictPolicy::Overwrite => {
                    if self.store.contents_equal(&request.source, &destination)? {
                        debug!("destination already identical: {}", destination.display());
                        return Ok(staged(ImportOutcome::Unchanged));
                    }
                    ImportOutcome::Overwritten
                },
            }
        } else {
            ImportOutcome::Created
        };

        let written = self.store.transfer(&request.source, &destination, request.mode)?;
        info!(
            "{} {} ({} bytes, {})",
            outcome,
            destination.display(),
            written,
            request.mode
        );

        Ok(StagedFile {
            bytes: written,
            ..staged(outcome)
        })
    }

    /// Stage several files, one result per request in order
    ///
    /// A destination written by one source is never handed to a different
    /// source of the same batch: later requests for it fail with
    /// `DestinationClaimed` and their sources are left untouched.
    pub fn import_all(&self, requests: &[ImportRequest]) -> Vec<Result<StagedFile, ImportError>> {
        let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();
        let mut results = Vec::with_capacity(requests.len());

        for request in requests {
            let result = self.resolve_destination(request).and_then(|destination| {
                match claimed.get(&destination) {
                    Some(first) if *first != request.source => Err(ImportError::DestinationClaimed {
                        destination,
                        first: first.clone(),
                    }),
                    _ => self.import(request),
                }
            });
            if let Ok(staged) = &result {
                claimed.entry(staged.destination.clone()).or_insert_with(|| request.source.clone());
            }
            results.push(result);
        }

        results
    }
}
