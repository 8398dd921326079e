//! Common test utilities shared across test types
//!
//! - `fixtures.rs` - Temporary project builder
//! - `mocks.rs` - In-memory port implementations

pub mod fixtures;
