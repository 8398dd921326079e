//! Local filesystem staging store
//!
//! Writes go to a hidden `.<name>.partial` sibling first and are renamed
//! into place, so a failed transfer never leaves a truncated staged file.

use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::core::models::{ImportError, TransferMode};
use crate::core::ports::StagingStore;

/// Suffix of in-flight staged files
pub const PARTIAL_SUFFIX: &str = ".partial";

/// Staging store backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStagingStore;

impl LocalStagingStore {
    /// Create a new local store
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Temporary path a destination is written through
#[must_use]
pub fn partial_path(destination: &Path) -> PathBuf {
    let name = destination.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    destination.with_file_name(format!(".{name}{PARTIAL_SUFFIX}"))
}

fn not_writable(path: &Path) -> impl FnOnce(io::Error) -> ImportError + '_ {
    move |source| ImportError::DestinationNotWritable {
        path: path.to_path_buf(),
        source,
    }
}

fn unreadable(path: &Path) -> impl FnOnce(io::Error) -> ImportError + '_ {
    move |source| ImportError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    }
}

fn readers_equal(a: impl Read, b: impl Read) -> io::Result<bool> {
    let mut a = BufReader::new(a);
    let mut b = BufReader::new(b);
    let mut buf_a = [0u8; 8192];
    let mut buf_b = [0u8; 8192];

    loop {
        let n = a.read(&mut buf_a)?;
        if n == 0 {
            return Ok(b.read(&mut buf_b[..1])? == 0);
        }
        let mut filled = 0;
        while filled < n {
            let m = b.read(&mut buf_b[filled..n])?;
            if m == 0 {
                return Ok(false);
            }
            filled += m;
        }
        if buf_a[..n] != buf_b[..n] {
            return Ok(false);
        }
    }
}

impl LocalStagingStore {
    fn copy_through_partial(source: &Path, destination: &Path) -> Result<u64, ImportError> {
        let partial = partial_path(destination);
        let bytes = match fs::copy(source, &partial) {
            Ok(bytes) => bytes,
            Err(e) => {
                let _ = fs::remove_file(&partial);
                return Err(not_writable(destination)(e));
            },
        };
        if let Err(e) = fs::rename(&partial, destination) {
            let _ = fs::remove_file(&partial);
            return Err(not_writable(destination)(e));
        }
        Ok(bytes)
    }
}

impl StagingStore for LocalStagingStore {
    fn inspect_source(&self, source: &Path) -> Result<u64, ImportError> {
        let meta = fs::metadata(source).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ImportError::SourceNotFound(source.to_path_buf())
            } else {
                unreadable(source)(e)
            }
        })?;
        if !meta.is_file() {
            return Err(ImportError::SourceNotAFile(source.to_path_buf()));
        }
        File::open(source).map_err(unreadable(source))?;
        Ok(meta.len())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn same_file(&self, a: &Path, b: &Path) -> bool {
        match (fs::canonicalize(a), fs::canonicalize(b)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }

    fn contents_equal(&self, a: &Path, b: &Path) -> Result<bool, ImportError> {
        let meta_a = fs::metadata(a).map_err(unreadable(a))?;
        let meta_b = fs::metadata(b).map_err(not_writable(b))?;
        if !meta_b.is_file() || meta_a.len() != meta_b.len() {
            return Ok(false);
        }
        let file_a = File::open(a).map_err(unreadable(a))?;
        let file_b = File::open(b).map_err(not_writable(b))?;
        readers_equal(file_a, file_b).map_err(unreadable(a))
    }

    fn transfer(
        &self,
        source: &Path,
        destination: &Path,
        mode: TransferMode,
    ) -> Result<u64, ImportError> {
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(not_writable(parent))?;
        }

        match mode {
            TransferMode::Copy => Self::copy_through_partial(source, destination),
            TransferMode::Move => {
                if fs::rename(source, destination).is_ok() {
                    return fs::metadata(destination).map(|m| m.len()).map_err(not_writable(destination));
                }
                // Cross-device moves fall back to copy + remove
                let bytes = Self::copy_through_partial(source, destination)?;
                if let Err(e) = fs::remove_file(source) {
                    log::warn!("staged {} but could not remove source: {e}", destination.display());
                }
                Ok(bytes)
            },
        }
    }
}
