//! In-context knowledge base embedded into generation prompts.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use thiserror::Error;

/// Top-level sections every knowledge base carries.
pub const SECTION_NAMES: [&str; 4] = ["schema", "rules", "practices", "patterns"];

/// Curated nested mapping of domain facts used as in-context grounding
/// for the generative model.
///
/// Invariant: the four top-level sections (`schema`, `rules`,
/// `practices`, `patterns`) are always present, even if empty, so prompt
/// construction never fails on a missing key. The knowledge base is
/// created at agent construction, replaced wholesale by an extraction
/// pass, and never partially mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnowledgeBase {
    sections: Mapping,
}

/// Structural problems with an extracted knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnowledgeStructureError {
    /// The extracted value was not a mapping.
    #[error("extracted knowledge is not a mapping")]
    NotAMapping,

    /// The extracted mapping carried no entries at all.
    #[error("extracted knowledge is empty")]
    Empty,
}

impl KnowledgeBase {
    /// Builds the extracted value into a knowledge base.
    ///
    /// The value must be a non-empty mapping. Any of the four standard
    /// sections the extraction left out are filled with empty mappings
    /// to uphold the always-present invariant.
    pub fn from_value(value: Value) -> Result<Self, KnowledgeStructureError> {
        let mut sections = match value {
            Value::Mapping(m) => m,
            _ => return Err(KnowledgeStructureError::NotAMapping),
        };
        if sections.is_empty() {
            return Err(KnowledgeStructureError::Empty);
        }
        for name in SECTION_NAMES {
            let key = Value::String(name.to_string());
            if !sections.contains_key(&key) {
                sections.insert(key, Value::Mapping(Mapping::new()));
            }
        }
        Ok(Self { sections })
    }

    /// Returns a named top-level section.
    pub fn section(&self, name: &str) -> Option<&Value> {
        self.sections.get(&Value::String(name.to_string()))
    }

    /// Serializes the knowledge base as block YAML for prompt embedding.
    pub fn to_yaml(&self) -> serde_yaml::Result<String> {
        serde_yaml::to_string(&self.sections)
    }
}

impl Default for KnowledgeBase {
    /// Static default: all four sections present with their standard
    /// named lists, all lists empty.
    fn default() -> Self {
        let mut sections = Mapping::new();
        sections.insert(
            "schema".into(),
            section_with(&["components", "parameters"]),
        );
        sections.insert("rules".into(), section_with(&["validation", "security"]));
        sections.insert(
            "practices".into(),
            section_with(&["deployment", "configuration"]),
        );
        sections.insert(
            "patterns".into(),
            section_with(&["common", "recommended"]),
        );
        Self { sections }
    }
}

fn section_with(lists: &[&str]) -> Value {
    let mut section = Mapping::new();
    for name in lists {
        section.insert(
            Value::String((*name).to_string()),
            Value::Sequence(Vec::new()),
        );
    }
    Value::Mapping(section)
}
