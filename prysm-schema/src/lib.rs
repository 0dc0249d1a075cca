//! # prysm-schema
//!
//! Data-model builder and schema renderer for Prysm.
//!
//! This crate provides:
//! - AST types for models, fields, and relations
//! - [`SchemaBuilder`], an imperative get-or-create builder
//! - A deterministic renderer producing Prisma-style schema text
//! - An opt-in [`Validator`] for a stricter contract
//! - Document sinks persisting rendered schemas per tenant
//! - Configuration parser for `prysm.toml` files
//!
//! ## Example
//!
//! ```rust
//! use prysm_schema::{RelationKind, ScalarType, SchemaBuilder};
//!
//! let mut builder = SchemaBuilder::new();
//! builder.add_field("Post", "id", ScalarType::Int, None, false);
//! builder.add_field("Post", "authorId", ScalarType::Int, None, false);
//! builder.add_relation("Post", "author", RelationKind::ManyToOne, "User", Some("posts"));
//! builder.add_relation("User", "posts", RelationKind::OneToMany, "Post", Some("author"));
//!
//! let text = builder.generate_schema_text();
//! assert!(text.contains("author User @relation(fields: [authorId], references: [id])"));
//! assert!(text.contains("posts Post[]"));
//! ```

pub mod ast;
pub mod builder;
pub mod config;
pub mod error;
pub mod render;
pub mod sink;
pub mod validator;

pub use ast::*;
pub use builder::SchemaBuilder;
pub use config::PrysmConfig;
pub use error::{SchemaError, SchemaResult};
pub use render::{DATASOURCE_PREAMBLE, Rendered, RenderDiagnostic, render_schema};
pub use sink::{DocumentSink, FileSink, MemorySink};
pub use validator::{Validator, validate_schema};
