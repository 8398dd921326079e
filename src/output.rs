//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::path::{Path, PathBuf};

use colored::Colorize;
use serde::Serialize;

use crate::adapters::local::{LayerInventory, ScaffoldReport};
use crate::core::models::{Dataset, ImportOutcome, Pipeline, StagedFile};
use crate::core::services::{DatasetProfile, NodeRun};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Show `path` relative to `root` when possible
#[must_use]
pub fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).to_string_lossy().replace('\\', "/")
}

fn outcome_label(outcome: ImportOutcome) -> String {
    let label = format!("{outcome:<11}");
    match outcome {
        ImportOutcome::Created => label.green().to_string(),
        ImportOutcome::Overwritten => label.yellow().to_string(),
        ImportOutcome::Unchanged | ImportOutcome::Skipped => label.dimmed().to_string(),
    }
}

/// A source that failed to stage
#[derive(Debug, Serialize)]
pub struct ImportFailure {
    /// Source path as given
    pub source: PathBuf,
    /// Error message
    pub error: String,
}

/// Result of an import operation
#[derive(Debug, Serialize)]
pub struct ImportResult {
    /// Whether every source was staged
    pub success: bool,
    /// Project root destinations are shown relative to
    #[serde(skip)]
    pub root: PathBuf,
    /// Staged files
    pub staged: Vec<StagedFile>,
    /// Sources that failed
    pub failed: Vec<ImportFailure>,
}

impl ImportResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        for s in &self.staged {
            println!(
                "  {} {} ({} bytes)",
                outcome_label(s.outcome),
                display_path(&s.destination, &self.root),
                s.bytes
            );
        }
        for f in &self.failed {
            println!("  {} {}: {}", "failed     ".red(), f.source.display(), f.error);
        }

        let written = self.staged.iter().filter(|s| s.outcome.wrote()).count();
        println!(
            "\n{} staged, {} unchanged or skipped, {} failed",
            written,
            self.staged.len() - written,
            self.failed.len()
        );
    }
}

/// Result of `init`
#[derive(Debug, Serialize)]
pub struct InitResult {
    /// Project root
    pub root: PathBuf,
    /// What was created or kept
    #[serde(flatten)]
    pub report: ScaffoldReport,
}

impl InitResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("Initializing datastage project...\n");
        for path in &self.report.created {
            println!("  Created {}", display_path(path, &self.root));
        }
        for path in &self.report.kept {
            println!("  Kept {} (use --force to overwrite)", display_path(path, &self.root));
        }
        println!("\nProject ready.");
        println!("\nNext steps:");
        println!("  datastage import <file.csv>");
        println!("  datastage run");
    }
}

/// Result of `status`
#[derive(Debug, Serialize)]
pub struct StatusResult {
    /// Project root
    pub root: PathBuf,
    /// Config environment
    pub env: String,
    /// Whether `conf/base` exists
    pub initialized: bool,
    /// Per-layer inventory
    pub layers: Vec<LayerInventory>,
}

impl StatusResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("Project: {} (env: {})", self.root.display(), self.env);
        if !self.initialized {
            println!("Not initialized. Run 'datastage init' to create conf/ and data/.");
        }
        println!();
        for layer in &self.layers {
            if layer.exists {
                println!(
                    "  {:22} {:>4} file(s) {:>10} bytes",
                    layer.dir,
                    layer.files.len(),
                    layer.bytes
                );
            } else {
                println!("  {:22} {}", layer.dir, "missing".dimmed());
            }
        }
    }
}

/// Result of `catalog list`
#[derive(Debug, Serialize)]
pub struct CatalogListResult {
    /// Datasets in name order
    pub datasets: Vec<Dataset>,
}

impl CatalogListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.datasets.is_empty() {
            println!("No datasets in catalog.");
            println!("Add one with: datastage catalog add <name> --layer raw");
            return;
        }
        println!("Datasets:\n");
        for d in &self.datasets {
            println!("  {:24} [{}] {}", d.name, d.layer, d.filepath.display());
        }
        println!("\n{} dataset(s).", self.datasets.len());
    }
}

/// A registered pipeline for listing
#[derive(Debug, Serialize)]
pub struct PipelineInfo {
    /// Registered name
    pub name: String,
    /// The pipeline
    #[serde(flatten)]
    pub pipeline: Pipeline,
}

/// Result of `pipeline list`
#[derive(Debug, Serialize)]
pub struct PipelineListResult {
    /// Registered pipelines
    pub pipelines: Vec<PipelineInfo>,
}

impl PipelineListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        for p in &self.pipelines {
            println!("{}:", p.name);
            for node in &p.pipeline.nodes {
                let inputs: Vec<_> =
                    node.inputs.iter().map(|(arg, reference)| format!("{arg}={reference}")).collect();
                println!("  {} ({})", node.name, inputs.join(", "));
            }
        }
    }
}

/// Result of `run`
#[derive(Debug, Serialize)]
pub struct RunResult {
    /// Pipeline name
    pub pipeline: String,
    /// Project root
    #[serde(skip)]
    pub root: PathBuf,
    /// Completed nodes
    pub nodes: Vec<NodeRun>,
}

impl RunResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("Pipeline {}:", self.pipeline);
        for run in &self.nodes {
            println!(
                "  {} {} {} ({} bytes)",
                run.node,
                outcome_label(run.staged.outcome),
                display_path(&run.staged.destination, &self.root),
                run.staged.bytes
            );
        }
        println!("\n{} node(s) completed.", self.nodes.len());
    }
}

/// Result of `profile`
#[derive(Debug, Serialize)]
pub struct ProfileResult {
    /// Profiled file
    pub path: PathBuf,
    /// Summary
    #[serde(flatten)]
    pub profile: DatasetProfile,
}

impl ProfileResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("{}\n", self.path.display());
                println!("{}", self.profile.report());
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
