//! Imperative builder for Prysm schemas.
//!
//! [`SchemaBuilder`] owns one [`Schema`] and exposes get-or-create mutation
//! operations on it. Naming a model that does not exist yet creates it, so
//! declarations can arrive in any order and relations may point at models
//! that are declared later.
//!
//! ```rust
//! use prysm_schema::{DefaultValue, RelationKind, ScalarType, SchemaBuilder};
//!
//! let mut builder = SchemaBuilder::new();
//! builder.create_model("User");
//! builder.add_field("User", "id", ScalarType::Int, Some(DefaultValue::ClientGeneratedId), false);
//! builder.set_primary_key("User", "id")?;
//! builder.add_relation("User", "posts", RelationKind::OneToMany, "Post", Some("author"));
//!
//! let text = builder.generate_schema_text();
//! assert!(text.contains("  id Int @id @default(cuid())"));
//! assert!(text.contains("  posts Post[]"));
//! # Ok::<(), prysm_schema::SchemaError>(())
//! ```

use std::path::PathBuf;

use smol_str::SmolStr;
use tracing::{debug, info};

use crate::ast::{DefaultValue, Field, FieldType, Relation, RelationKind, Schema};
use crate::error::{SchemaError, SchemaResult};
use crate::render::{self, Rendered};
use crate::sink::DocumentSink;

/// Builder accumulating model, field, and relation declarations.
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    schema: Schema,
}

impl SchemaBuilder {
    /// Create a builder with an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder continuing from an existing schema.
    pub fn from_schema(schema: Schema) -> Self {
        Self { schema }
    }

    /// Ensure a model exists. Does nothing if it already does.
    pub fn create_model(&mut self, model: &str) {
        let existed = self.schema.contains_model(model);
        self.schema.model_entry(model);
        if !existed {
            debug!(model, "created model");
        }
    }

    /// Append a field to a model, creating the model if needed.
    ///
    /// Fields with an existing name are appended again, not merged.
    pub fn add_field(
        &mut self,
        model: &str,
        field: &str,
        field_type: impl Into<FieldType>,
        default: Option<DefaultValue>,
        is_unique: bool,
    ) {
        let mut def = Field::new(field, field_type);
        def.default = default;
        def.is_unique = is_unique;
        self.add_field_def(model, def);
    }

    /// Append a fully built field to a model, creating the model if needed.
    pub fn add_field_def(&mut self, model: &str, field: Field) {
        debug!(
            model,
            field = %field.name,
            field_type = %field.field_type,
            "added field"
        );
        self.schema.model_entry(model).add_field(field);
    }

    /// Mark a field as the model's primary key.
    ///
    /// The model is created if needed, even when the field lookup fails.
    /// When several fields share the name, the first one is marked.
    pub fn set_primary_key(&mut self, model: &str, field: &str) -> SchemaResult<()> {
        let target = self
            .schema
            .model_entry(model)
            .get_field_mut(field)
            .ok_or_else(|| SchemaError::field_not_found(model, field))?;
        target.is_primary_key = true;
        debug!(model, field, "set primary key");
        Ok(())
    }

    /// Append a relation to a model, creating the model if needed.
    ///
    /// `related_model` is not checked; it may be declared later or never.
    pub fn add_relation(
        &mut self,
        model: &str,
        relation: &str,
        kind: RelationKind,
        related_model: &str,
        inverse_relation: Option<&str>,
    ) {
        let mut def = Relation::new(relation, kind, related_model);
        def.inverse_relation = inverse_relation.map(SmolStr::new);
        self.add_relation_def(model, def);
    }

    /// Append a fully built relation to a model, creating the model if needed.
    ///
    /// Use this with [`Relation::with_backing_field`] to name the
    /// foreign-key field instead of relying on name inference.
    pub fn add_relation_def(&mut self, model: &str, relation: Relation) {
        debug!(
            model,
            relation = %relation.name,
            kind = %relation.kind,
            related = %relation.related_model,
            "added relation"
        );
        self.schema.model_entry(model).add_relation(relation);
    }

    /// Borrow the live schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Mutably borrow the live schema.
    pub fn schema_mut(&mut self) -> &mut Schema {
        &mut self.schema
    }

    /// Consume the builder, returning the schema.
    pub fn into_schema(self) -> Schema {
        self.schema
    }

    /// Discard every model.
    pub fn reset(&mut self) {
        debug!(models = self.schema.len(), "reset schema");
        self.schema.clear();
    }

    /// Render the schema document.
    pub fn generate_schema_text(&self) -> String {
        render::render_schema(&self.schema)
    }

    /// Render the schema document together with its diagnostics.
    pub fn render(&self) -> Rendered {
        render::render_with_diagnostics(&self.schema)
    }

    /// Render the schema and hand it to `sink` under `tenant_id`.
    ///
    /// Sink failures are returned unchanged.
    pub fn save(&self, sink: &impl DocumentSink, tenant_id: &str) -> SchemaResult<PathBuf> {
        let text = self.generate_schema_text();
        let location = sink.write_document(tenant_id, &text)?;
        info!(tenant = tenant_id, location = %location.display(), "saved schema");
        Ok(location)
    }
}
