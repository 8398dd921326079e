//! Pipeline registry and runner
//!
//! Pipelines are registered by name. `__default__` runs when no name is
//! given. Node inputs are bound to parameters and executed in order.

use std::collections::BTreeMap;
use std::path::PathBuf;

use log::info;
use serde::Serialize;
use thiserror::Error;

use crate::core::models::{
    ConfigError, ConflictPolicy, Destination, ImportError, ImportRequest, Node, NodeKind, Pipeline,
    StagedFile, TransferMode, param_key,
};
use crate::core::ports::{ParameterSource, StagingStore};

use super::Importer;

/// Name of the pipeline run when none is specified
pub const DEFAULT_PIPELINE: &str = "__default__";

/// Name of the local import pipeline
pub const IMPORT_DATA_PIPELINE: &str = "import_data";

/// Errors raised while running a pipeline
#[derive(Debug, Error)]
pub enum RunError {
    /// Pipeline name is not registered
    #[error("unknown pipeline: {name} (registered: {})", .registered.join(", "))]
    UnknownPipeline {
        /// Requested name
        name: String,
        /// Registered names
        registered: Vec<String>,
    },

    /// Node input could not be resolved
    #[error("node {node} has invalid inputs")]
    Config {
        /// Node name
        node: String,
        /// Underlying configuration error
        source: ConfigError,
    },

    /// Node failed to stage its file
    #[error("node {node} failed")]
    Import {
        /// Node name
        node: String,
        /// Underlying import error
        source: ImportError,
    },
}

/// Result of a single node
#[derive(Debug, Clone, Serialize)]
pub struct NodeRun {
    /// Node name
    pub node: String,
    /// File staged by the node
    pub staged: StagedFile,
}

/// The local import pipeline: one node staging `import_local.source`
#[must_use]
pub fn import_data_pipeline() -> Pipeline {
    Pipeline::new(vec![
        Node::new("import_local_node", NodeKind::ImportLocal)
            .input("source", "params:import_local.source")
            .input("destination", "params:import_local.destination")
            .input("on_conflict", "params:import_local.on_conflict")
            .input("mode", "params:import_local.mode"),
    ])
}

/// All registered pipelines by name
#[must_use]
pub fn register_pipelines() -> BTreeMap<String, Pipeline> {
    let mut pipelines = BTreeMap::new();
    pipelines.insert(IMPORT_DATA_PIPELINE.to_string(), import_data_pipeline());
    pipelines.insert(DEFAULT_PIPELINE.to_string(), import_data_pipeline());
    pipelines
}

/// Look up a registered pipeline
///
/// # Errors
///
/// Returns `RunError::UnknownPipeline` listing the registered names.
pub fn find_pipeline(name: &str) -> Result<Pipeline, RunError> {
    let mut pipelines = register_pipelines();
    pipelines.remove(name).ok_or_else(|| RunError::UnknownPipeline {
        name: name.to_string(),
        registered: register_pipelines().into_keys().collect(),
    })
}

/// Run every node of `pipeline` in order, stopping at the first failure
///
/// # Errors
///
/// Returns the first node's configuration or import error.
pub fn run_pipeline<S: StagingStore>(
    pipeline: &Pipeline,
    params: &dyn ParameterSource,
    importer: &Importer<S>,
) -> Result<Vec<NodeRun>, RunError> {
    let mut runs = Vec::with_capacity(pipeline.nodes.len());

    for node in &pipeline.nodes {
        info!("running node {}", node.name);
        let staged = match node.kind {
            NodeKind::ImportLocal => run_import_local(node, params, importer)?,
        };
        runs.push(NodeRun {
            node: node.name.clone(),
            staged,
        });
    }

    Ok(runs)
}

fn run_import_local<S: StagingStore>(
    node: &Node,
    params: &dyn ParameterSource,
    importer: &Importer<S>,
) -> Result<StagedFile, RunError> {
    let config_err = |source: ConfigError| RunError::Config {
        node: node.name.clone(),
        source,
    };

    let source = required_input(node, "source", params).map_err(config_err)?;
    let destination = required_input(node, "destination", params).map_err(config_err)?;

    let on_conflict = match optional_input(node, "on_conflict", params).map_err(config_err)? {
        Some(value) => parse_input::<ConflictPolicy>(node, "on_conflict", &value).map_err(config_err)?,
        None => ConflictPolicy::default(),
    };
    let mode = match optional_input(node, "mode", params).map_err(config_err)? {
        Some(value) => parse_input::<TransferMode>(node, "mode", &value).map_err(config_err)?,
        None => TransferMode::default(),
    };

    // Parameter paths are relative to the project root, like catalog paths
    let request = ImportRequest::raw(importer.root().join(source))
        .to(Destination::Path(PathBuf::from(destination)))
        .mode(mode)
        .on_conflict(on_conflict);

    importer.import(&request).map_err(|source| RunError::Import {
        node: node.name.clone(),
        source,
    })
}

fn input_key<'a>(node: &'a Node, argument: &str) -> Option<&'a str> {
    node.reference(argument).and_then(param_key)
}

fn optional_input(
    node: &Node,
    argument: &str,
    params: &dyn ParameterSource,
) -> Result<Option<String>, ConfigError> {
    match input_key(node, argument) {
        Some(key) => params.string(key),
        None => Ok(None),
    }
}

fn required_input(
    node: &Node,
    argument: &str,
    params: &dyn ParameterSource,
) -> Result<String, ConfigError> {
    let key = input_key(node, argument)
        .ok_or_else(|| ConfigError::MissingParameter(format!("{}.{argument}", node.name)))?;
    params.require_string(key)
}

fn parse_input<T>(node: &Node, argument: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = String>,
{
    value.parse().map_err(|message| ConfigError::InvalidParameter {
        key: input_key(node, argument).unwrap_or(argument).to_string(),
        message,
    })
}
