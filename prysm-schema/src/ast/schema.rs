//! Top-level schema definition.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::Model;

/// An ordered collection of models.
///
/// Models are keyed by their own name. Serialized, a schema is the list of
/// its models; deserializing keys each model by its name, and a repeated
/// name replaces the earlier model in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Model>", into = "Vec<Model>")]
pub struct Schema {
    models: IndexMap<SmolStr, Model>,
}

impl Schema {
    /// Create a new empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a model by name, creating an empty one if it does not exist.
    pub fn model_entry(&mut self, name: &str) -> &mut Model {
        self.models
            .entry(SmolStr::new(name))
            .or_insert_with(|| Model::new(name))
    }

    /// Get a model by name.
    pub fn get_model(&self, name: &str) -> Option<&Model> {
        self.models.get(name)
    }

    /// Check if a model exists.
    pub fn contains_model(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// All models, in declaration order.
    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// Number of declared models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Check whether no models are declared.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Remove all models.
    pub fn clear(&mut self) {
        self.models.clear();
    }
}

impl From<Vec<Model>> for Schema {
    fn from(models: Vec<Model>) -> Self {
        let models = models
            .into_iter()
            .map(|model| (model.name.clone(), model))
            .collect();
        Self { models }
    }
}

impl From<Schema> for Vec<Model> {
    fn from(schema: Schema) -> Self {
        schema.models.into_values().collect()
    }
}

/// Schema statistics for debugging/info.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaStats {
    /// Number of models.
    pub model_count: usize,
    /// Total number of fields across all models.
    pub field_count: usize,
    /// Total number of relations across all models.
    pub relation_count: usize,
}

impl Schema {
    /// Get statistics about the schema.
    pub fn stats(&self) -> SchemaStats {
        SchemaStats {
            model_count: self.models.len(),
            field_count: self.models.values().map(|m| m.fields.len()).sum(),
            relation_count: self.models.values().map(|m| m.relations.len()).sum(),
        }
    }
}

impl std::fmt::Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stats = self.stats();
        write!(
            f,
            "Schema({} models, {} fields, {} relations)",
            stats.model_count, stats.field_count, stats.relation_count
        )
    }
}
