//! Opt-in strict validation.
//!
//! The builder is permissive: duplicate field names, several `@id` fields,
//! relations to undeclared models, and missing foreign-key fields are all
//! accepted and rendered as-is. The validator reports those cases for
//! callers that want a stricter contract:
//! - No duplicate field names within a model
//! - At most one primary key per model
//! - Relation targets are declared models
//! - Many-to-one relations resolve a backing field

use std::collections::HashSet;

use crate::ast::*;
use crate::error::{SchemaError, SchemaResult};

/// Schema validator for semantic analysis.
#[derive(Debug)]
pub struct Validator {
    /// Collected validation errors.
    errors: Vec<SchemaError>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self { errors: vec![] }
    }

    /// Validate a schema, collecting every problem before failing.
    pub fn validate(&mut self, schema: &Schema) -> SchemaResult<()> {
        self.errors.clear();

        for model in schema.models() {
            self.check_duplicate_fields(model);
            self.check_primary_keys(model);
            self.check_relations(model, schema);
        }

        if self.errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(count = self.errors.len(), "schema validation failed");
            Err(SchemaError::ValidationFailed {
                count: self.errors.len(),
                errors: std::mem::take(&mut self.errors),
            })
        }
    }

    fn check_duplicate_fields(&mut self, model: &Model) {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();

        for field in &model.fields {
            let name = field.name();
            if !seen.insert(name) && reported.insert(name) {
                self.errors.push(SchemaError::duplicate(
                    "field",
                    format!("{}.{}", model.name(), name),
                ));
            }
        }
    }

    fn check_primary_keys(&mut self, model: &Model) {
        if model.id_fields().len() > 1 {
            self.errors.push(SchemaError::MultiplePrimaryKeys {
                model: model.name().to_string(),
            });
        }
    }

    fn check_relations(&mut self, model: &Model, schema: &Schema) {
        for relation in &model.relations {
            if !schema.contains_model(&relation.related_model) {
                self.errors.push(SchemaError::UnknownRelationTarget {
                    model: model.name().to_string(),
                    relation: relation.name().to_string(),
                    target: relation.related_model.to_string(),
                });
            }

            // One-to-one without a backing field is the legitimate inverse side.
            if relation.kind == RelationKind::ManyToOne
                && model.backing_field_for(relation).is_none()
            {
                self.errors.push(SchemaError::MissingBackingField {
                    model: model.name().to_string(),
                    relation: relation.name().to_string(),
                });
            }
        }
    }
}

/// Validate a schema with a fresh [`Validator`].
pub fn validate_schema(schema: &Schema) -> SchemaResult<()> {
    Validator::new().validate(schema)
}
