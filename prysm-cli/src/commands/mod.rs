//! CLI command implementations.

pub mod generate;
pub mod print;
pub mod validate;
pub mod version;
