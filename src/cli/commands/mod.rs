//! Command implementations

mod catalog;
mod import;
mod init;
mod pipeline;
mod profile;
mod run;
mod status;

pub use catalog::catalog;
pub use import::import;
pub use init::init;
pub use pipeline::pipeline;
pub use profile::profile;
pub use run::run;
pub use status::status;
