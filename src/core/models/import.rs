//! Import request and result types

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Dataset, Layer};

/// How the source file reaches the staging area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferMode {
    /// Copy and leave the source in place
    #[default]
    Copy,
    /// Move the source into the staging area
    Move,
}

impl std::fmt::Display for TransferMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Copy => write!(f, "copy"),
            Self::Move => write!(f, "move"),
        }
    }
}

impl std::str::FromStr for TransferMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "copy" => Ok(Self::Copy),
            "move" | "mv" => Ok(Self::Move),
            _ => Err(format!("Invalid mode: {s}. Use: copy, move")),
        }
    }
}

/// What to do when the destination already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Replace the destination (no-op when bytes already match)
    #[default]
    Overwrite,
    /// Leave the destination untouched
    Skip,
    /// Fail the import
    Error,
}

impl std::fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overwrite => write!(f, "overwrite"),
            Self::Skip => write!(f, "skip"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for ConflictPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overwrite" => Ok(Self::Overwrite),
            "skip" => Ok(Self::Skip),
            "error" | "fail" => Ok(Self::Error),
            _ => Err(format!("Invalid conflict policy: {s}. Use: overwrite, skip, error")),
        }
    }
}

/// Naming convention applied to the staged file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamingOptions {
    /// Explicit file name (extension appended from the source if missing)
    pub rename: Option<String>,
    /// Lowercase and replace non-alphanumerics with `_`
    pub standardize: bool,
    /// Append `_YYYYMMDD` to the stem
    pub stamp: Option<NaiveDate>,
}

/// Where a staged file should land
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Into a layer directory, named by convention
    Layer {
        /// Target layer
        layer: Layer,
        /// Naming convention
        naming: NamingOptions,
    },
    /// Onto a catalog dataset's file path
    Dataset(Dataset),
    /// Onto an explicit path relative to the project root
    Path(PathBuf),
}

impl Default for Destination {
    fn default() -> Self {
        Self::Layer {
            layer: Layer::Raw,
            naming: NamingOptions::default(),
        }
    }
}

/// A single staging request
#[derive(Debug, Clone, Default)]
pub struct ImportRequest {
    /// Path to the source file
    pub source: PathBuf,
    /// Where to stage it
    pub destination: Destination,
    /// Copy or move
    pub mode: TransferMode,
    /// Behavior when the destination exists
    pub on_conflict: ConflictPolicy,
}

impl ImportRequest {
    /// Request to copy `source` into the raw layer under its own name
    #[must_use]
    pub fn raw(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    /// Set the destination
    #[must_use]
    pub fn to(mut self, destination: Destination) -> Self {
        self.destination = destination;
        self
    }

    /// Set the transfer mode
    #[must_use]
    pub fn mode(mut self, mode: TransferMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the conflict policy
    #[must_use]
    pub fn on_conflict(mut self, policy: ConflictPolicy) -> Self {
        self.on_conflict = policy;
        self
    }
}

/// What an import did to the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportOutcome {
    /// Destination did not exist and was written
    Created,
    /// Destination existed with different bytes and was replaced
    Overwritten,
    /// Destination already held identical bytes
    Unchanged,
    /// Destination existed and was left alone
    Skipped,
}

impl ImportOutcome {
    /// Whether the destination was written
    #[must_use]
    pub const fn wrote(self) -> bool {
        matches!(self, Self::Created | Self::Overwritten)
    }
}

impl std::fmt::Display for ImportOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Created => "created",
            Self::Overwritten => "overwritten",
            Self::Unchanged => "unchanged",
            Self::Skipped => "skipped",
        };
        f.pad(s)
    }
}

/// Result of a successful import
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StagedFile {
    /// Source path as given
    pub source: PathBuf,
    /// Absolute destination path
    pub destination: PathBuf,
    /// Bytes written, or the source size when nothing was written
    pub bytes: u64,
    /// What happened to the destination
    pub outcome: ImportOutcome,
    /// Copy or move
    pub mode: TransferMode,
}
