//! Text Generator Port - interface for remote text-generation services.
//!
//! Abstracts the generative model call so the agent and knowledge loader
//! never couple to a specific provider. The sampling profile is fixed
//! per provider instance and not exposed per-call.

use async_trait::async_trait;

/// One segment of a generation prompt.
///
/// Prompts are sequences of text and optional inline binary segments
/// (e.g. a reference document attached alongside instructions).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptPart {
    /// Plain text.
    Text(String),
    /// Inline binary data with its media type.
    Blob {
        /// MIME type, e.g. `application/pdf`.
        media_type: String,
        /// Raw bytes.
        data: Vec<u8>,
    },
}

impl PromptPart {
    /// Creates a text segment.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Creates a binary segment.
    pub fn blob(media_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self::Blob {
            media_type: media_type.into(),
            data,
        }
    }
}

/// Port for remote text generation.
///
/// Implementations make a single attempt and fail fast: no retries, no
/// backoff. Once invoked, a call runs to completion or failure.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates raw text from a sequence of prompt segments.
    async fn generate(&self, parts: &[PromptPart]) -> Result<String, GenerationError>;

    /// Provider name for logging.
    fn name(&self) -> &str;
}

/// Errors from the remote generation call.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Rate limited or out of quota.
    #[error("rate limited by provider")]
    RateLimited,

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },

    /// Provider returned an unexpected status or payload.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Response arrived but could not be decoded.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl GenerationError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a malformed-response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }
}
