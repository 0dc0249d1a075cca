//! Relation definitions for the Prysm schema AST.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// The cardinality of a relation, seen from the owning model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    /// One-to-many relation.
    OneToMany,
    /// Many-to-one relation (inverse of one-to-many).
    ManyToOne,
    /// Many-to-many relation.
    ManyToMany,
    /// One-to-one relation.
    OneToOne,
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OneToOne => write!(f, "1:1"),
            Self::OneToMany => write!(f, "1:n"),
            Self::ManyToOne => write!(f, "n:1"),
            Self::ManyToMany => write!(f, "m:n"),
        }
    }
}

/// A named association from the owning model to another model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// Relation name, used as the field name on the owning model.
    pub name: SmolStr,
    /// Relation cardinality.
    pub kind: RelationKind,
    /// Name of the target model. It need not be declared yet.
    pub related_model: SmolStr,
    /// Name of the relation on the other side. Informational only.
    #[serde(default)]
    pub inverse_relation: Option<SmolStr>,
    /// Explicit foreign-key field on the owning model.
    ///
    /// When unset, the backing field is inferred from the relation name.
    #[serde(default)]
    pub backing_field: Option<SmolStr>,
}

impl Relation {
    /// Create a new relation.
    pub fn new(
        name: impl Into<SmolStr>,
        kind: RelationKind,
        related_model: impl Into<SmolStr>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            related_model: related_model.into(),
            inverse_relation: None,
            backing_field: None,
        }
    }

    /// Get the relation name as a string.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Set the inverse relation name.
    pub fn with_inverse(mut self, inverse: impl Into<SmolStr>) -> Self {
        self.inverse_relation = Some(inverse.into());
        self
    }

    /// Set the backing foreign-key field explicitly.
    pub fn with_backing_field(mut self, field: impl Into<SmolStr>) -> Self {
        self.backing_field = Some(field.into());
        self
    }

    /// The lowercase needle used to infer the backing field: `<name>id`.
    pub fn inferred_backing_needle(&self) -> String {
        let mut needle = self.name.to_lowercase();
        needle.push_str("id");
        needle
    }
}

/// Orders two model names by UTF-16 code units, as JavaScript string
/// comparison does. This differs from `str`'s byte order only when one name
/// has a supplementary-plane character and the other a character in
/// U+E000..=U+FFFF.
fn sorted_pair<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a.encode_utf16().cmp(b.encode_utf16()).is_le() {
        (a, b)
    } else {
        (b, a)
    }
}

/// Relation-table name for a many-to-many pair: `<first>To<second>`.
pub fn many_to_many_name(model_a: &str, model_b: &str) -> String {
    let (first, second) = sorted_pair(model_a, model_b);
    format!("{}To{}", first, second)
}

/// Relation name for a one-to-one pair: `RelationBetween<first>And<second>`.
pub fn one_to_one_name(model_a: &str, model_b: &str) -> String {
    let (first, second) = sorted_pair(model_a, model_b);
    format!("RelationBetween{}And{}", first, second)
}
