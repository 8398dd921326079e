//! Staging store port
//!
//! Defines the filesystem operations the importer needs.

use std::path::Path;

use super::super::models::{ImportError, TransferMode};

/// Storage the importer reads sources from and writes staged files to
///
/// Implementations decide how bytes move; the importer decides whether
/// they should.
pub trait StagingStore: Send + Sync {
    /// Validate the source and return its size in bytes
    ///
    /// Fails with `SourceNotFound`, `SourceNotAFile` or `SourceUnreadable`.
    fn inspect_source(&self, source: &Path) -> Result<u64, ImportError>;

    /// Whether a destination path already exists
    fn exists(&self, path: &Path) -> bool;

    /// Whether two paths refer to the same underlying file
    fn same_file(&self, a: &Path, b: &Path) -> bool;

    /// Whether two existing files hold identical bytes
    fn contents_equal(&self, a: &Path, b: &Path) -> Result<bool, ImportError>;

    /// Place `source` at `destination`, creating parent directories
    ///
    /// Returns the number of bytes written.
    fn transfer(
        &self,
        source: &Path,
        destination: &Path,
        mode: TransferMode,
    ) -> Result<u64, ImportError>;
}
