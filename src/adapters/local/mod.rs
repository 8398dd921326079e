//! Local filesystem adapters
//!
//! - [`store`] - `StagingStore` implementation over `std::fs`
//! - [`scaffold`] - Project directory layout for `init`
//! - [`inventory`] - Files per layer for `status`

pub mod inventory;
pub mod scaffold;
pub mod store;

pub use inventory::{LayerInventory, inventory, inventory_layer};
pub use scaffold::{ScaffoldReport, init_project};
pub use store::{LocalStagingStore, partial_path};
