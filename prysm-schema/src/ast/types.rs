//! Type definitions for the Prysm schema AST.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Scalar types a field can be declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarType {
    /// Integer type.
    Int,
    /// Text type.
    String,
    /// List of text values.
    StringList,
    /// Boolean type.
    Boolean,
    /// Date and time type (rendered as `DateTime`).
    Date,
    /// Floating point type.
    Float,
    /// Structured JSON type.
    Json,
}

impl ScalarType {
    /// Parse a scalar type from its input label.
    ///
    /// Labels are case-sensitive. `float` is accepted alongside `Float`.
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "Int" => Some(Self::Int),
            "String" => Some(Self::String),
            "String[]" => Some(Self::StringList),
            "Boolean" => Some(Self::Boolean),
            "Date" => Some(Self::Date),
            "float" | "Float" => Some(Self::Float),
            "Json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Get the input label for this type.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Int => "Int",
            Self::String => "String",
            Self::StringList => "String[]",
            Self::Boolean => "Boolean",
            Self::Date => "Date",
            Self::Float => "float",
            Self::Json => "Json",
        }
    }

    /// Get the token emitted into the schema document.
    pub fn schema_token(&self) -> &'static str {
        match self {
            Self::Int => "Int",
            Self::String => "String",
            Self::StringList => "String[]",
            Self::Boolean => "Boolean",
            Self::Date => "DateTime",
            Self::Float => "Float",
            Self::Json => "Json",
        }
    }
}

impl std::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.schema_token())
    }
}

/// A field type in the schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    /// A known scalar type.
    Scalar(ScalarType),
    /// An unrecognized label, emitted verbatim.
    Unsupported(SmolStr),
}

impl FieldType {
    /// Resolve a type label. Unknown labels are kept as-is.
    pub fn from_label(label: &str) -> Self {
        match ScalarType::from_label(label) {
            Some(scalar) => Self::Scalar(scalar),
            None => Self::Unsupported(SmolStr::new(label)),
        }
    }

    /// Get the input label.
    pub fn label(&self) -> &str {
        match self {
            Self::Scalar(s) => s.label(),
            Self::Unsupported(name) => name.as_str(),
        }
    }

    /// Get the token emitted into the schema document.
    pub fn schema_token(&self) -> &str {
        match self {
            Self::Scalar(s) => s.schema_token(),
            Self::Unsupported(name) => name.as_str(),
        }
    }
}

impl From<ScalarType> for FieldType {
    fn from(scalar: ScalarType) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<&str> for FieldType {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}

impl From<String> for FieldType {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        field_type.label().to_string()
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.schema_token())
    }
}

/// Generator expression used as a field default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefaultValue {
    /// Client-generated collision-resistant id.
    #[serde(rename = "cuid()")]
    ClientGeneratedId,
    /// Custom id generator.
    #[serde(rename = "uid()")]
    CustomId,
    /// Current timestamp at insert time.
    #[serde(rename = "now()")]
    CurrentTimestamp,
}

impl DefaultValue {
    /// Get the generator expression.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClientGeneratedId => "cuid()",
            Self::CustomId => "uid()",
            Self::CurrentTimestamp => "now()",
        }
    }
}

impl std::fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
