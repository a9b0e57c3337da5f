//! Shared building blocks for the registry crates: response types and
//! logging setup.

pub mod types;
pub mod utils;
