//! CLI command implementations.

pub mod circuit;
pub mod common;
pub mod factor;
pub mod version;
