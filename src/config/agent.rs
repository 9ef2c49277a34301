//! Agent configuration: reference document and output locations.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// Configuration for the config-generation agent itself.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    /// Path to the reference document the knowledge base is extracted from.
    #[serde(default = "default_reference_doc")]
    pub reference_doc: PathBuf,

    /// Directory generated configurations are persisted into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl AgentConfig {
    /// Returns the reference document path.
    pub fn reference_doc(&self) -> &Path {
        &self.reference_doc
    }

    /// Returns the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Validate the agent configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ValidationError::invalid(
                "agent.output_dir",
                "must not be empty",
            ));
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            reference_doc: default_reference_doc(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_reference_doc() -> PathBuf {
    PathBuf::from("icl.pdf")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("configs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_paths() {
        let config = AgentConfig::default();
        assert_eq!(config.reference_doc(), Path::new("icl.pdf"));
        assert_eq!(config.output_dir(), Path::new("configs"));
    }

    #[test]
    fn validation_rejects_empty_output_dir() {
        let config = AgentConfig {
            output_dir: PathBuf::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
