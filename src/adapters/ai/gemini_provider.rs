//! Gemini Provider - Implementation of TextGenerator for Google's
//! Generative Language API.
//!
//! Calls the `generateContent` endpoint with a fixed sampling profile
//! biased toward deterministic output (low temperature, bounded nucleus
//! and top-k sampling). One attempt per call, no retries.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_model("gemini-1.5-flash")
//!     .with_temperature(0.1);
//!
//! let provider = GeminiProvider::new(config)?;
//! ```

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::AiConfig;
use crate::ports::{GenerationError, PromptPart, TextGenerator};

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication. Held per-instance so multiple agents
    /// with different credentials can coexist.
    api_key: Secret<String>,
    /// Model to use (e.g. "gemini-1.5-flash").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Nucleus sampling probability.
    pub top_p: f32,
    /// Top-k sampling limit.
    pub top_k: u32,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Creates a configuration with the given API key and the default
    /// low-randomness sampling profile.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-1.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            temperature: 0.1,
            top_p: 0.8,
            top_k: 40,
            timeout: Duration::from_secs(60),
        }
    }

    /// Builds a provider configuration from the typed app configuration.
    pub fn from_app_config(ai: &AiConfig) -> Option<Self> {
        let key = ai.api_key.as_ref()?.expose_secret().clone();
        Some(
            Self::new(key)
                .with_model(ai.model.clone())
                .with_temperature(ai.temperature)
                .with_top_p(ai.top_p)
                .with_top_k(ai.top_k)
                .with_timeout(ai.timeout()),
        )
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the nucleus sampling probability.
    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = top_p;
        self
    }

    /// Sets the top-k sampling limit.
    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini API provider implementation.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Creates a new Gemini provider with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GenerationError::network(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Builds the generateContent endpoint URL.
    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    /// Converts prompt parts into the Gemini wire format.
    fn to_request(&self, parts: &[PromptPart]) -> GeminiRequest {
        let parts = parts
            .iter()
            .map(|part| match part {
                PromptPart::Text(text) => GeminiPart::Text { text: text.clone() },
                PromptPart::Blob { media_type, data } => GeminiPart::InlineData {
                    inline_data: GeminiBlob {
                        mime_type: media_type.clone(),
                        data: BASE64.encode(data),
                    },
                },
            })
            .collect();

        GeminiRequest {
            contents: vec![GeminiContent { parts }],
            generation_config: GeminiGenerationConfig {
                temperature: self.config.temperature,
                top_p: self.config.top_p,
                top_k: self.config.top_k,
            },
        }
    }

    fn map_status(&self, status: StatusCode, body: String) -> GenerationError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                GenerationError::AuthenticationFailed
            }
            StatusCode::TOO_MANY_REQUESTS => GenerationError::RateLimited,
            _ => GenerationError::unavailable(format!("{}: {}", status, body)),
        }
    }

    fn map_transport(&self, err: reqwest::Error) -> GenerationError {
        if err.is_timeout() {
            GenerationError::Timeout {
                timeout_secs: self.config.timeout.as_secs() as u32,
            }
        } else if err.is_connect() {
            GenerationError::network(format!("connection failed: {}", err))
        } else {
            GenerationError::network(err.to_string())
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    async fn generate(&self, parts: &[PromptPart]) -> Result<String, GenerationError> {
        let request = self.to_request(parts);

        let response = self
            .client
            .post(self.generate_url())
            .query(&[("key", self.config.api_key())])
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.map_status(status, body));
        }

        let payload: GeminiResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::malformed(e.to_string()))?;

        payload
            .first_text()
            .ok_or_else(|| GenerationError::malformed("response carried no candidate text"))
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

// Wire format for the generateContent endpoint.

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum GeminiPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: GeminiBlob,
    },
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiBlob {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

impl GeminiResponse {
    /// Concatenated text of the first candidate's parts.
    fn first_text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let mut text = String::new();
        for part in &candidate.content.parts {
            if let GeminiPart::Text { text: t } = part {
                text.push_str(t);
            }
        }
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}
