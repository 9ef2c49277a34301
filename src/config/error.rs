//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying loader failure (missing variable, type mismatch).
    #[error("configuration loading failed: {0}")]
    Load(#[from] config::ConfigError),
}

/// Errors raised by semantic validation of loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required value is missing.
    #[error("missing required configuration: {0}")]
    MissingRequired(&'static str),

    /// A value is present but outside its allowed range or format.
    #[error("invalid configuration for {field}: {reason}")]
    Invalid {
        /// Configuration field that failed validation.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ValidationError {
    /// Creates an invalid-value error.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_displays_field() {
        let err = ValidationError::MissingRequired("CONFIGEN__AI__API_KEY");
        assert!(err.to_string().contains("CONFIGEN__AI__API_KEY"));
    }

    #[test]
    fn invalid_displays_field_and_reason() {
        let err = ValidationError::invalid("ai.temperature", "must be within [0, 2]");
        assert!(err.to_string().contains("ai.temperature"));
        assert!(err.to_string().contains("must be within [0, 2]"));
    }
}
