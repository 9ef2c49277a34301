//! YAML document parser - turns sanitized model output into documents.

use serde::Deserialize;
use serde_yaml::Value;
use thiserror::Error;
use tracing::error;

use crate::domain::ConfigDocument;

/// Sanitized text parsed to zero documents.
///
/// Callers convert this into an error document rather than propagating.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("empty YAML content")]
pub struct EmptyContentError;

/// Parses sanitized text as one or more YAML documents.
pub struct YamlDocumentParser;

impl YamlDocumentParser {
    /// Parses `text`, handling multi-document streams.
    ///
    /// - one document: returned directly
    /// - several (separated by `---` boundaries): wrapped under a
    ///   `documents` key, order preserved
    /// - structural YAML error: logged and converted into an
    ///   `{error, timestamp}` document; never propagated
    ///
    /// # Errors
    ///
    /// Returns [`EmptyContentError`] when the text contains no documents
    /// at all.
    pub fn parse(text: &str) -> Result<ConfigDocument, EmptyContentError> {
        // A whitespace-only stream would otherwise parse as a single
        // null document rather than zero documents.
        if text.trim().is_empty() {
            return Err(EmptyContentError);
        }

        let mut documents = Vec::new();

        for deserializer in serde_yaml::Deserializer::from_str(text) {
            match Value::deserialize(deserializer) {
                Ok(value) => documents.push(value),
                Err(err) => {
                    error!(error = %err, "YAML parsing failed");
                    return Ok(ConfigDocument::error("Failed to parse YAML"));
                }
            }
        }

        if documents.is_empty() {
            return Err(EmptyContentError);
        }

        Ok(ConfigDocument::from_documents(documents))
    }
}
