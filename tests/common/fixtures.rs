//! Test fixtures
//!
//! Provides a temporary project directory with helpers for writing files.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary project directory
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Create an empty project directory (no `conf/`, no `data/`)
    pub fn bare() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Create a project with `conf/base` and `conf/local`
    pub fn initialized() -> Self {
        let project = Self::bare();
        fs::create_dir_all(project.path().join("conf/base")).unwrap();
        fs::create_dir_all(project.path().join("conf/local")).unwrap();
        project
    }

    /// Get the root path of the project
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the root, creating parents
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        full_path
    }

    /// Read a file relative to the root
    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.dir.path().join(path)).unwrap()
    }
}
