//! Generative model configuration.

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Configuration for the remote text-generation service.
///
/// The sampling profile is fixed per agent instance and biased toward
/// deterministic output, since the task is structured-data generation
/// rather than prose.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Gemini API key. Passed explicitly into the provider constructor,
    /// never installed as process-global state.
    pub api_key: Option<Secret<String>>,

    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Nucleus sampling probability.
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Top-k sampling limit.
    #[serde(default = "default_top_k")]
    pub top_k: u32,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl AiConfig {
    /// Get timeout as Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().is_empty())
    }

    /// Validate the AI configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_api_key() {
            return Err(ValidationError::MissingRequired("CONFIGEN__AI__API_KEY"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::invalid(
                "ai.temperature",
                "must be within [0, 2]",
            ));
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(ValidationError::invalid("ai.top_p", "must be within [0, 1]"));
        }
        if self.model.is_empty() {
            return Err(ValidationError::invalid("ai.model", "must not be empty"));
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            top_k: default_top_k(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_temperature() -> f32 {
    0.1
}

fn default_top_p() -> f32 {
    0.8
}

fn default_top_k() -> u32 {
    40
}

fn default_timeout() -> u64 {
    60
}
