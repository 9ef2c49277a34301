//! AI adapters: Gemini provider and test mock.

mod gemini_provider;
mod mock_provider;

pub use gemini_provider::{GeminiConfig, GeminiProvider};
pub use mock_provider::MockTextGenerator;
