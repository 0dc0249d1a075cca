//! Document sinks persisting rendered schemas per tenant.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use parking_lot::Mutex;
use tracing::debug;

use crate::config::OutputConfig;
use crate::error::{SchemaError, SchemaResult};

/// Default directory rendered documents are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "./prisma";

/// Default extension of rendered documents.
pub const DEFAULT_EXTENSION: &str = "prisma";

/// Destination for rendered schema documents, keyed by tenant id.
pub trait DocumentSink {
    /// Persist `text` for `tenant_id`, returning where it was stored.
    fn write_document(&self, tenant_id: &str, text: &str) -> SchemaResult<PathBuf>;
}

/// Reject tenant ids that could escape the sink's namespace.
pub fn validate_tenant_id(tenant_id: &str) -> SchemaResult<()> {
    let invalid = tenant_id.is_empty()
        || tenant_id == "."
        || tenant_id.contains("..")
        || tenant_id.contains(['/', '\\', '\0']);

    if invalid {
        return Err(SchemaError::InvalidTenant {
            tenant: tenant_id.to_string(),
        });
    }
    Ok(())
}

/// Writes each document to `<root>/<tenant_id>.<extension>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSink {
    root: PathBuf,
    extension: String,
}

impl Default for FileSink {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

impl FileSink {
    /// Create a sink writing `.prisma` files under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Create a sink from the `[output]` configuration section.
    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(&config.directory).with_extension(&config.extension)
    }

    /// Set the file extension (without the leading dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    /// Directory documents are written to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File extension of written documents.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Path the document for `tenant_id` is written to.
    pub fn path_for(&self, tenant_id: &str) -> SchemaResult<PathBuf> {
        validate_tenant_id(tenant_id)?;
        let file_name = if self.extension.is_empty() {
            tenant_id.to_string()
        } else {
            format!("{}.{}", tenant_id, self.extension)
        };
        Ok(self.root.join(file_name))
    }
}

impl DocumentSink for FileSink {
    fn write_document(&self, tenant_id: &str, text: &str) -> SchemaResult<PathBuf> {
        let path = self.path_for(tenant_id)?;

        std::fs::create_dir_all(&self.root)
            .map_err(|e| SchemaError::io(self.root.display().to_string(), e))?;
        std::fs::write(&path, text).map_err(|e| SchemaError::io(path.display().to_string(), e))?;

        debug!(path = %path.display(), bytes = text.len(), "wrote schema document");
        Ok(path)
    }
}

/// Keeps documents in memory. Locations are the bare tenant ids.
#[derive(Debug, Default)]
pub struct MemorySink {
    documents: Mutex<IndexMap<String, String>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the last document written for `tenant_id`.
    pub fn get(&self, tenant_id: &str) -> Option<String> {
        self.documents.lock().get(tenant_id).cloned()
    }

    /// Tenant ids with a stored document, in first-write order.
    pub fn tenants(&self) -> Vec<String> {
        self.documents.lock().keys().cloned().collect()
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.lock().len()
    }

    /// Check if no document was written.
    pub fn is_empty(&self) -> bool {
        self.documents.lock().is_empty()
    }
}

impl DocumentSink for MemorySink {
    fn write_document(&self, tenant_id: &str, text: &str) -> SchemaResult<PathBuf> {
        validate_tenant_id(tenant_id)?;
        self.documents
            .lock()
            .insert(tenant_id.to_string(), text.to_string());
        Ok(PathBuf::from(tenant_id))
    }
}
