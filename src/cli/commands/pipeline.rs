//! Inspect registered pipelines

use datastage::core::services::register_pipelines;
use datastage::output::{PipelineInfo, PipelineListResult};

use crate::cli::app::{PipelineAction, Session};

/// Handle pipeline subcommands
pub fn pipeline(action: &PipelineAction, session: &Session) -> anyhow::Result<()> {
    match action {
        PipelineAction::List => {
            let pipelines = register_pipelines()
                .into_iter()
                .map(|(name, pipeline)| PipelineInfo { name, pipeline })
                .collect();
            PipelineListResult { pipelines }.render(session.mode);
            Ok(())
        },
    }
}
