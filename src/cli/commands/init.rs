//! Initialize a datastage project

use datastage::adapters::local::init_project;
use datastage::output::InitResult;

use crate::cli::app::Session;

/// Scaffold data layers and config files in the start directory
pub fn init(force: bool, session: &Session) -> anyhow::Result<()> {
    let report = init_project(&session.start, force)?;
    InitResult {
        root: session.start.clone(),
        report,
    }
    .render(session.mode);
    Ok(())
}
