//! PDF reference extractor backed by the `pdf-extract` crate.

use std::path::Path;

use crate::ports::{ExtractError, ReferenceExtractor};

/// Extracts concatenated page text from a PDF reference document.
#[derive(Debug, Clone, Default)]
pub struct PdfReferenceExtractor;

impl PdfReferenceExtractor {
    /// Creates a new extractor.
    pub fn new() -> Self {
        Self
    }
}

impl ReferenceExtractor for PdfReferenceExtractor {
    fn extract_text(&self, path: &Path) -> Result<String, ExtractError> {
        if !path.exists() {
            return Err(ExtractError::not_found(path));
        }

        pdf_extract::extract_text(path).map_err(|e| ExtractError::extraction(e.to_string()))
    }
}
