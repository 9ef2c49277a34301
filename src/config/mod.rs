//! Application configuration module.
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `CONFIGEN`
//! prefix and nested sections use `__` as separator, e.g.
//! `CONFIGEN__AI__API_KEY` maps to `ai.api_key`.

mod agent;
mod ai;
mod error;

pub use agent::AgentConfig;
pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Generative model configuration.
    #[serde(default)]
    pub ai: AiConfig,

    /// Agent configuration (reference document, output directory).
    #[serde(default)]
    pub agent: AgentConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file if present (development convenience), then
    /// reads `CONFIGEN__*` environment variables into typed sections.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if values cannot be parsed into the
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CONFIGEN")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.agent.validate()?;
        Ok(())
    }
}
