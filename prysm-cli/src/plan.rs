//! Build plans: serialized sequences of builder operations.
//!
//! A plan is a TOML or JSON document with an ordered `steps` array. Each
//! step names a builder operation in its `op` key:
//!
//! ```toml
//! [[steps]]
//! op = "add_field"
//! model = "User"
//! field = "id"
//! type = "Int"
//! default = "cuid()"
//!
//! [[steps]]
//! op = "set_primary_key"
//! model = "User"
//! field = "id"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use prysm_schema::{DefaultValue, FieldType, Relation, RelationKind, SchemaBuilder};

use crate::error::{CliError, CliResult};

/// An ordered list of builder operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildPlan {
    /// Steps, applied in order.
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// A single builder operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Ensure a model exists.
    CreateModel {
        /// Model name.
        model: String,
    },
    /// Append a field.
    AddField {
        /// Model name.
        model: String,
        /// Field name.
        field: String,
        /// Type label (`Int`, `String`, `Boolean`, `Date`, `float`, `Json`, ...).
        #[serde(rename = "type")]
        field_type: FieldType,
        /// Default generator (`cuid()`, `uid()`, `now()`).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<DefaultValue>,
        /// Declared uniqueness.
        #[serde(default)]
        unique: bool,
    },
    /// Mark a field as primary key.
    SetPrimaryKey {
        /// Model name.
        model: String,
        /// Field name.
        field: String,
    },
    /// Append a relation.
    AddRelation {
        /// Owning model.
        model: String,
        /// Relation name.
        name: String,
        /// Cardinality.
        kind: RelationKind,
        /// Target model.
        related: String,
        /// Name of the relation on the other side.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        inverse: Option<String>,
        /// Explicit foreign-key field.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        backing_field: Option<String>,
    },
    /// Discard everything declared so far.
    Reset,
}

impl Step {
    /// The `op` label of this step.
    pub fn op(&self) -> &'static str {
        match self {
            Self::CreateModel { .. } => "create_model",
            Self::AddField { .. } => "add_field",
            Self::SetPrimaryKey { .. } => "set_primary_key",
            Self::AddRelation { .. } => "add_relation",
            Self::Reset => "reset",
        }
    }

    /// Apply this step to `builder`.
    pub fn apply(&self, builder: &mut SchemaBuilder) -> prysm_schema::SchemaResult<()> {
        match self {
            Self::CreateModel { model } => builder.create_model(model),
            Self::AddField {
                model,
                field,
                field_type,
                default,
                unique,
            } => builder.add_field(model, field, field_type.clone(), *default, *unique),
            Self::SetPrimaryKey { model, field } => builder.set_primary_key(model, field)?,
            Self::AddRelation {
                model,
                name,
                kind,
                related,
                inverse,
                backing_field,
            } => {
                let mut relation = Relation::new(name.as_str(), *kind, related.as_str());
                if let Some(inverse) = inverse {
                    relation = relation.with_inverse(inverse.as_str());
                }
                if let Some(field) = backing_field {
                    relation = relation.with_backing_field(field.as_str());
                }
                builder.add_relation_def(model, relation);
            }
            Self::Reset => builder.reset(),
        }
        Ok(())
    }
}

impl BuildPlan {
    /// Load a plan from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Err(CliError::Plan(format!(
                "Plan file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_toml(&content)
        }
    }

    /// Parse a plan from TOML.
    pub fn from_toml(content: &str) -> CliResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a plan from JSON.
    pub fn from_json(content: &str) -> CliResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Apply every step to `builder`, stopping at the first failure.
    pub fn apply(&self, builder: &mut SchemaBuilder) -> CliResult<()> {
        for (index, step) in self.steps.iter().enumerate() {
            step.apply(builder).map_err(|source| CliError::Step {
                index: index + 1,
                op: step.op(),
                source,
            })?;
        }
        tracing::debug!(steps = self.steps.len(), "applied build plan");
        Ok(())
    }

    /// Build a fresh schema from this plan.
    pub fn build(&self) -> CliResult<SchemaBuilder> {
        let mut builder = SchemaBuilder::new();
        self.apply(&mut builder)?;
        Ok(builder)
    }
}
