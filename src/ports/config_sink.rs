//! Config Sink Port - durable persistence of generated configurations.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::ConfigDocument;

/// Port for persisting a configuration document to durable storage.
///
/// Artifacts are write-once: each save produces a new timestamp-qualified
/// name and is never updated in place.
#[async_trait]
pub trait ConfigSink: Send + Sync {
    /// Persists the document, returning the path it was written to.
    ///
    /// `prefix` qualifies the artifact name; without one, a generic
    /// `config` prefix is used.
    async fn save(
        &self,
        document: &ConfigDocument,
        prefix: Option<&str>,
    ) -> Result<PathBuf, PersistError>;
}

/// Errors from persisting a document.
///
/// Persistence failures are fatal to the calling operation: they are
/// logged and propagated, never retried.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Serializing the document to YAML failed.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// Writing to disk failed (permissions, disk full).
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

impl PersistError {
    /// Creates a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }
}
