//! Configuration documents produced from model output.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Sequence, Value};

/// Key wrapping multiple parsed documents.
const DOCUMENTS_KEY: &str = "documents";

/// Key marking a parse-failure document.
const ERROR_KEY: &str = "error";

/// A generated configuration document.
///
/// The shape is whatever the model emits, constrained only by being
/// parseable YAML, so this wraps a generic [`serde_yaml::Value`] rather
/// than a fixed record type. When the model emits several documents in
/// one stream they are wrapped under a single `documents` key; when
/// parsing fails the document degenerates to `{error, timestamp}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigDocument(Value);

impl ConfigDocument {
    /// Wraps an already-parsed value.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Builds a document from one or more parsed YAML documents.
    ///
    /// A single document is returned directly; several are wrapped under
    /// the `documents` key with their original order preserved.
    pub fn from_documents(mut docs: Vec<Value>) -> Self {
        if docs.len() == 1 {
            return Self(docs.remove(0));
        }
        let mut wrapper = Mapping::new();
        wrapper.insert(
            Value::String(DOCUMENTS_KEY.to_string()),
            Value::Sequence(docs),
        );
        Self(Value::Mapping(wrapper))
    }

    /// Builds the fallback error document for unparsable model output.
    pub fn error(message: impl Into<String>) -> Self {
        let mut mapping = Mapping::new();
        mapping.insert(
            Value::String(ERROR_KEY.to_string()),
            Value::String(message.into()),
        );
        mapping.insert(
            Value::String("timestamp".to_string()),
            Value::String(Local::now().to_string()),
        );
        Self(Value::Mapping(mapping))
    }

    /// Returns true if this is a parse-failure error document.
    ///
    /// Requires both the `error` and `timestamp` keys, so a generated
    /// configuration that legitimately carries a top-level `error` key
    /// is not misclassified.
    pub fn is_error(&self) -> bool {
        self.get(ERROR_KEY).is_some() && self.get("timestamp").is_some()
    }

    /// Returns the wrapped multi-document sequence, if any.
    pub fn documents(&self) -> Option<&Sequence> {
        self.get(DOCUMENTS_KEY).and_then(Value::as_sequence)
    }

    /// Looks up a top-level key when the document is a mapping.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0
            .as_mapping()
            .and_then(|m| m.get(&Value::String(key.to_string())))
    }

    /// Returns the underlying value.
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Consumes the document, returning the underlying value.
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Serializes the document as block YAML, insertion order preserved.
    pub fn to_yaml(&self) -> serde_yaml::Result<String> {
        serde_yaml::to_string(&self.0)
    }

    /// Encodes the serialized document as a base64 `data:` URI, suitable
    /// for a browser download link.
    pub fn to_data_uri(&self) -> serde_yaml::Result<String> {
        let yaml = self.to_yaml()?;
        Ok(format!(
            "data:application/x-yaml;base64,{}",
            BASE64.encode(yaml.as_bytes())
        ))
    }
}

impl From<Value> for ConfigDocument {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}
