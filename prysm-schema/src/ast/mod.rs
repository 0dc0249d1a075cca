//! Abstract Syntax Tree (AST) types for Prysm schemas.
//!
//! This module contains the in-memory data model the builder mutates and
//! the renderer reads.

mod field;
mod model;
mod relation;
mod schema;
mod types;

pub use field::*;
pub use model::*;
pub use relation::*;
pub use schema::*;
pub use types::*;
