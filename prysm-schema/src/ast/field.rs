//! Field definitions for the Prysm schema AST.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::{DefaultValue, FieldType};

/// A scalar field on a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name.
    pub name: SmolStr,
    /// Field type.
    pub field_type: FieldType,
    /// Whether this field is the model's primary key.
    #[serde(default)]
    pub is_primary_key: bool,
    /// Whether the caller declared this field unique.
    #[serde(default)]
    pub is_unique: bool,
    /// Default value generator.
    #[serde(default)]
    pub default: Option<DefaultValue>,
}

impl Field {
    /// Create a new field with no modifiers.
    pub fn new(name: impl Into<SmolStr>, field_type: impl Into<FieldType>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            is_primary_key: false,
            is_unique: false,
            default: None,
        }
    }

    /// Get the field name as a string.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Mark the field as primary key.
    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    /// Mark the field as unique.
    pub fn unique(mut self) -> Self {
        self.is_unique = true;
        self
    }

    /// Set the default value.
    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    /// Check whether the lowercased name contains `needle`.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn name_contains_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.field_type)?;
        if self.is_primary_key {
            write!(f, " @id")?;
        }
        if let Some(default) = self.default {
            write!(f, " @default({})", default)?;
        }
        if self.is_unique {
            write!(f, " @unique")?;
        }
        Ok(())
    }
}
