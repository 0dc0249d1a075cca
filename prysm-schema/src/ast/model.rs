//! Model definitions for the Prysm schema AST.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::{Field, Relation};

/// A model definition (maps to a database table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Model name. Read-only outside the crate so it always matches the
    /// key the model is stored under in a [`Schema`](super::Schema).
    pub(crate) name: SmolStr,
    /// Model fields, in declaration order. Names are not deduplicated.
    pub fields: Vec<Field>,
    /// Model relations, in declaration order.
    pub relations: Vec<Relation>,
}

impl Model {
    /// Create a new empty model.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            fields: vec![],
            relations: vec![],
        }
    }

    /// Get the model name as a string.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Append a field.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Append a relation.
    pub fn add_relation(&mut self, relation: Relation) {
        self.relations.push(relation);
    }

    /// Get the first field with this exact name.
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get the first field with this exact name, mutably.
    pub fn get_field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Get the primary key field(s).
    pub fn id_fields(&self) -> Vec<&Field> {
        self.fields.iter().filter(|f| f.is_primary_key).collect()
    }

    /// Position of the field backing `relation`, if any.
    ///
    /// An explicit backing field is matched by exact name. Otherwise the
    /// first field whose lowercased name contains `<relation name>id`
    /// (lowercased) is chosen.
    pub fn backing_field_index(&self, relation: &Relation) -> Option<usize> {
        match &relation.backing_field {
            Some(explicit) => self.fields.iter().position(|f| f.name == *explicit),
            None => {
                let needle = relation.inferred_backing_needle();
                self.fields
                    .iter()
                    .position(|f| f.name_contains_lowercase(&needle))
            }
        }
    }

    /// The field backing `relation`, if any.
    pub fn backing_field_for(&self, relation: &Relation) -> Option<&Field> {
        self.backing_field_index(relation).map(|i| &self.fields[i])
    }
}
