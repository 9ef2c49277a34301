//! Mock text generator for testing.
//!
//! Configurable implementation of the TextGenerator port so tests run
//! without calling the real Gemini API: queued canned responses, error
//! injection, and call capture for verification.
//!
//! # Example
//!
//! ```ignore
//! let generator = MockTextGenerator::new()
//!     .with_response("component: webapp\nmemory: 2GB\n");
//!
//! let text = generator.generate(&[PromptPart::text("deploy")]).await?;
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{GenerationError, PromptPart, TextGenerator};

/// A configured mock outcome.
#[derive(Debug)]
enum MockOutcome {
    /// Return this text.
    Success(String),
    /// Return this error.
    Failure(GenerationError),
}

/// Mock text generator with queued responses and call capture.
#[derive(Debug, Clone, Default)]
pub struct MockTextGenerator {
    /// Pre-configured outcomes, consumed in order.
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    /// Captured prompts for verification.
    calls: Arc<Mutex<Vec<Vec<PromptPart>>>>,
}

impl MockTextGenerator {
    /// Creates an empty mock. With no queued outcomes, calls fail with
    /// an unavailable error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response.
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.outcomes
            .lock()
            .expect("mock lock poisoned")
            .push_back(MockOutcome::Success(text.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: GenerationError) -> Self {
        self.outcomes
            .lock()
            .expect("mock lock poisoned")
            .push_back(MockOutcome::Failure(error));
        self
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("mock lock poisoned").len()
    }

    /// Captured prompt parts for the nth call.
    pub fn call(&self, index: usize) -> Option<Vec<PromptPart>> {
        self.calls
            .lock()
            .expect("mock lock poisoned")
            .get(index)
            .cloned()
    }

    /// Concatenated text segments of the nth call's prompt.
    pub fn prompt_text(&self, index: usize) -> Option<String> {
        self.call(index).map(|parts| {
            parts
                .iter()
                .filter_map(|p| match p {
                    PromptPart::Text(t) => Some(t.as_str()),
                    PromptPart::Blob { .. } => None,
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, parts: &[PromptPart]) -> Result<String, GenerationError> {
        self.calls
            .lock()
            .expect("mock lock poisoned")
            .push(parts.to_vec());

        let outcome = self
            .outcomes
            .lock()
            .expect("mock lock poisoned")
            .pop_front();

        match outcome {
            Some(MockOutcome::Success(text)) => Ok(text),
            Some(MockOutcome::Failure(error)) => Err(error),
            None => Err(GenerationError::unavailable("no mock response queued")),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_queued_responses_in_order() {
        let generator = MockTextGenerator::new()
            .with_response("first")
            .with_response("second");

        assert_eq!(
            generator.generate(&[PromptPart::text("a")]).await.unwrap(),
            "first"
        );
        assert_eq!(
            generator.generate(&[PromptPart::text("b")]).await.unwrap(),
            "second"
        );
    }

    #[tokio::test]
    async fn captures_calls_for_verification() {
        let generator = MockTextGenerator::new().with_response("ok");
        generator
            .generate(&[PromptPart::text("deploy a webapp")])
            .await
            .unwrap();

        assert_eq!(generator.call_count(), 1);
        assert!(generator
            .prompt_text(0)
            .unwrap()
            .contains("deploy a webapp"));
    }

    #[tokio::test]
    async fn injected_errors_are_returned() {
        let generator = MockTextGenerator::new().with_error(GenerationError::RateLimited);
        let err = generator
            .generate(&[PromptPart::text("x")])
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::RateLimited));
    }

    #[tokio::test]
    async fn exhausted_queue_fails_unavailable() {
        let generator = MockTextGenerator::new();
        let err = generator
            .generate(&[PromptPart::text("x")])
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Unavailable { .. }));
    }
}
