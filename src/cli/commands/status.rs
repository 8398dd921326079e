//! Show staged files per layer

use datastage::adapters::local::inventory;
use datastage::output::StatusResult;

use crate::cli::app::Session;

/// Report file counts and sizes for every layer
pub fn status(session: &Session) -> anyhow::Result<()> {
    let layers = inventory(&session.project.root)?;
    StatusResult {
        root: session.project.root.clone(),
        env: session.project.env.clone(),
        initialized: session.project.initialized,
        layers,
    }
    .render(session.mode);
    Ok(())
}
