//! Reference Extractor Port - text extraction from reference documents.

use std::path::{Path, PathBuf};

/// Port for extracting text from a reference document (e.g. a PDF).
///
/// A missing file must surface as a distinct [`ExtractError::NotFound`]
/// before any remote call is attempted by callers.
pub trait ReferenceExtractor: Send + Sync {
    /// Returns the concatenated page-level text of the document.
    fn extract_text(&self, path: &Path) -> Result<String, ExtractError>;
}

/// Errors from reference-document extraction.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The reference document does not exist.
    #[error("reference document not found: {path}")]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The document exists but text could not be extracted.
    #[error("text extraction failed: {0}")]
    Extraction(String),
}

impl ExtractError {
    /// Creates a not-found error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Creates an extraction error.
    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction(message.into())
    }
}
