//! CLI command implementations.

pub mod common;
pub mod decompose;
pub mod search;
pub mod version;
