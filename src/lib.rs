//! # Prysm
//!
//! Build Prisma schema documents from programmatic model declarations.
//!
//! Prysm provides:
//! - An imperative builder for models, fields, and relations
//! - A deterministic renderer with relation-name synthesis and
//!   foreign-key inference
//! - Opt-in strict validation
//! - Document sinks that persist rendered schemas per tenant
//!
//! ## Quick Start
//!
//! ```rust
//! use prysm::prelude::*;
//!
//! let mut builder = SchemaBuilder::new();
//! builder.create_model("User");
//! builder.add_field("User", "id", ScalarType::Int, Some(DefaultValue::ClientGeneratedId), false);
//! builder.set_primary_key("User", "id")?;
//! builder.add_field("User", "email", ScalarType::String, None, true);
//!
//! let schema = builder.generate_schema_text();
//! assert!(schema.contains("model User {"));
//! assert!(schema.contains("  email String @unique"));
//! # Ok::<(), prysm::SchemaError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Schema model, builder, and renderer.
pub mod schema {
    pub use prysm_schema::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::schema::{
        DefaultValue, DocumentSink, FieldType, FileSink, PrysmConfig, Relation, RelationKind,
        ScalarType, Schema, SchemaBuilder, validate_schema,
    };
}

// Re-export key types at the crate root
pub use schema::{Schema, SchemaBuilder, SchemaError};
