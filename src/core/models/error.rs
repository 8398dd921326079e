//! Error types for staging and configuration

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while staging a file
#[derive(Debug, Error)]
pub enum ImportError {
    /// Source path does not exist
    #[error("source file not found: {0}")]
    SourceNotFound(PathBuf),

    /// Source path exists but is not a regular file
    #[error("source is not a file: {0}")]
    SourceNotAFile(PathBuf),

    /// Source exists but could not be read
    #[error("cannot read source file {path}: {source}")]
    SourceUnreadable {
        /// The source path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Destination directory or file could not be written
    #[error("destination not writable {path}: {source}")]
    DestinationNotWritable {
        /// The path that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Destination exists and the conflict policy forbids replacing it
    #[error("destination already exists: {0}")]
    AlreadyExists(PathBuf),

    /// Another source already staged to the same destination in this batch
    #[error("{destination} was already staged from {first} in this run")]
    DestinationClaimed {
        /// Shared destination
        destination: PathBuf,
        /// Source staged there first
        first: PathBuf,
    },

    /// Staged file name is empty or escapes the layer directory
    #[error("invalid staged file name: {0:?}")]
    InvalidName(String),

    /// Dataset is not declared in the catalog
    #[error("unknown dataset: {0}")]
    UnknownDataset(String),
}

/// Errors raised while loading project configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read {path}: {source}")]
    Read {
        /// The config file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has the wrong shape
    #[error("cannot parse {path}: {source}")]
    Parse {
        /// The config file
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// Catalog entry names an unknown layer
    #[error("dataset {dataset}: {message}")]
    InvalidLayer {
        /// Dataset name
        dataset: String,
        /// Parse error message
        message: String,
    },

    /// Required parameter is not set
    #[error("missing parameter: {0}")]
    MissingParameter(String),

    /// Parameter has an unexpected type or value
    #[error("invalid parameter {key}: {message}")]
    InvalidParameter {
        /// Dotted parameter key
        key: String,
        /// What was wrong
        message: String,
    },
}
