//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TextGenerator` - remote text-generation service
//! - `ReferenceExtractor` - text extraction from reference documents
//! - `ConfigSink` - durable persistence of generated configurations

mod config_sink;
mod reference_extractor;
mod text_generator;

pub use config_sink::{ConfigSink, PersistError};
pub use reference_extractor::{ExtractError, ReferenceExtractor};
pub use text_generator::{GenerationError, PromptPart, TextGenerator};
