//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::debug;

use super::commands;
use datastage::config::{GlobalConfig, ProjectContext};
use datastage::core::models::{ConflictPolicy, Layer};
use datastage::core::services::DEFAULT_PIPELINE;
use datastage::output::OutputMode;

/// datastage - Stage local data files into a layered project
#[derive(Parser, Debug)]
#[command(
    name = "datastage",
    version,
    about = "Stage local data files into a layered project",
    long_about = "Scaffold a layered data project and stage local CSV files into it.\n\n\
                  Layers are refinement stages under data/: 01_raw, 02_intermediate,\n\
                  03_primary, 04_feature, 05_model_input. Files are imported into raw."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration environment under conf/ (default: $DATASTAGE_ENV or "local")
    #[arg(long, global = true)]
    pub env: Option<String>,

    /// Run as if started in this directory
    #[arg(short = 'C', long = "project-dir", global = true)]
    pub project_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the data/ layers and conf/ files in the current directory
    Init {
        /// Overwrite existing config files
        #[arg(short, long)]
        force: bool,
    },

    /// Stage local files into a data layer
    Import(ImportArgs),

    /// Run a registered pipeline
    Run {
        /// Pipeline name
        #[arg(short, long, default_value = DEFAULT_PIPELINE)]
        pipeline: String,
    },

    /// Inspect registered pipelines
    Pipeline {
        #[command(subcommand)]
        action: PipelineAction,
    },

    /// Manage the dataset catalog (list, add)
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Show staged files per layer
    Status,

    /// Summarize a CSV file (rows, columns, missing values)
    Profile {
        /// Catalog dataset name or path to a CSV file
        target: String,
    },

    /// Show version
    Version,
}

/// Arguments of `import`
#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    /// Files or glob patterns to stage
    #[arg(required = true)]
    pub sources: Vec<String>,

    /// Target layer
    #[arg(short, long, default_value_t = Layer::Raw)]
    pub layer: Layer,

    /// Stage onto a catalog dataset's file path
    #[arg(short, long, conflicts_with_all = ["layer", "name", "standardize", "stamp"])]
    pub dataset: Option<String>,

    /// Staged file name (source extension kept if omitted)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Standardize the staged file name (lowercase, `_` separators)
    #[arg(long)]
    pub standardize: bool,

    /// Append today's date (`_YYYYMMDD`) to the staged file name
    #[arg(long)]
    pub stamp: bool,

    /// Move the source instead of copying it
    #[arg(long = "move")]
    pub move_source: bool,

    /// What to do if the destination exists: overwrite, skip, error
    #[arg(long)]
    pub on_conflict: Option<ConflictPolicy>,
}

#[derive(Subcommand, Debug)]
pub enum PipelineAction {
    /// List registered pipelines and their nodes
    List,
}

#[derive(Subcommand, Debug)]
pub enum CatalogAction {
    /// List datasets
    List,

    /// Add a dataset to conf/base/catalog.toml
    Add {
        /// Dataset name
        name: String,

        /// Layer: raw, intermediate, primary, feature, model_input
        #[arg(short, long, default_value_t = Layer::Raw)]
        layer: Layer,

        /// File path relative to the project root
        #[arg(short, long)]
        filepath: Option<PathBuf>,
    },
}

/// Everything a command needs to know about the invocation
#[derive(Debug)]
pub struct Session {
    /// Directory the command was started in (or `--project-dir`)
    pub start: PathBuf,
    /// Resolved project
    pub project: ProjectContext,
    /// User-level defaults
    pub global: GlobalConfig,
    /// Output mode
    pub mode: OutputMode,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let cwd = std::env::current_dir()?;
    let start = cli.project_dir.map_or_else(|| cwd.clone(), |dir| cwd.join(dir));
    let global = GlobalConfig::load();
    let project = ProjectContext::resolve(&start, cli.env.as_deref(), &global);
    debug!("project root {} (env {})", project.root.display(), project.env);

    let session = Session {
        start,
        project,
        global,
        mode,
    };

    match cli.command {
        Some(Command::Init { force }) => commands::init(force, &session),
        Some(Command::Import(args)) => commands::import(&args, &session),
        Some(Command::Run { pipeline }) => commands::run(&pipeline, &session),
        Some(Command::Pipeline { action }) => commands::pipeline(&action, &session),
        Some(Command::Catalog { action }) => commands::catalog(action, &session),
        Some(Command::Status) => commands::status(&session),
        Some(Command::Profile { target }) => commands::profile(&target, &session),
        Some(Command::Version) => {
            if mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("datastage v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("datastage v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'datastage --help' for usage");
                println!("Run 'datastage init' to get started");
            }
            Ok(())
        },
    }
}
