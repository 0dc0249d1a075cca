//! Error types for schema building, validation, and persistence.

// These warnings are false positives - the fields are used by derive macros
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur while building, validating, or saving a schema.
#[derive(Error, Debug, Diagnostic)]
pub enum SchemaError {
    /// A field referenced by name does not exist on the model.
    #[error("field `{field}` not found in model `{model}`")]
    #[diagnostic(code(prysm::schema::field_not_found))]
    FieldNotFound { model: String, field: String },

    /// Error reading or writing a file.
    #[error("failed to access file: {path}")]
    #[diagnostic(code(prysm::schema::io_error))]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Tenant id that cannot be used as a document key.
    #[error("invalid tenant id `{tenant}`")]
    #[diagnostic(
        code(prysm::schema::invalid_tenant),
        help("tenant ids must be non-empty and must not contain path separators or `..`")
    )]
    InvalidTenant { tenant: String },

    /// Duplicate definition.
    #[error("duplicate {kind} `{name}`")]
    #[diagnostic(code(prysm::schema::duplicate))]
    Duplicate { kind: String, name: String },

    /// More than one field marked as primary key.
    #[error("model `{model}` declares more than one `@id` field")]
    #[diagnostic(code(prysm::schema::multiple_primary_keys))]
    MultiplePrimaryKeys { model: String },

    /// Relation pointing at a model that was never declared.
    #[error("relation `{model}.{relation}` targets unknown model `{target}`")]
    #[diagnostic(code(prysm::schema::unknown_relation_target))]
    UnknownRelationTarget {
        model: String,
        relation: String,
        target: String,
    },

    /// Relation whose foreign-key field cannot be resolved.
    #[error("relation `{model}.{relation}` has no backing foreign-key field")]
    #[diagnostic(
        code(prysm::schema::missing_backing_field),
        help("declare a field named like `<relation>Id` or set the backing field explicitly")
    )]
    MissingBackingField { model: String, relation: String },

    /// Configuration error.
    #[error("configuration error: {message}")]
    #[diagnostic(code(prysm::schema::config_error))]
    ConfigError { message: String },

    /// TOML parsing error.
    #[error("failed to parse TOML")]
    #[diagnostic(code(prysm::schema::toml_error))]
    TomlError {
        #[source]
        source: toml::de::Error,
    },

    /// Validation error with multiple issues.
    #[error("schema validation failed with {count} error(s)")]
    #[diagnostic(code(prysm::schema::validation_failed))]
    ValidationFailed {
        count: usize,
        #[related]
        errors: Vec<SchemaError>,
    },
}

impl SchemaError {
    /// Create a field-not-found error.
    pub fn field_not_found(model: impl Into<String>, field: impl Into<String>) -> Self {
        Self::FieldNotFound {
            model: model.into(),
            field: field.into(),
        }
    }

    /// Create a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Duplicate {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Create an I/O error for a path.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }
}
