//! Document adapters: sanitization, parsing, and persistence.

mod file_persister;
mod sanitizer;
mod yaml_parser;

pub use file_persister::FilePersister;
pub use sanitizer::ResponseSanitizer;
pub use yaml_parser::{EmptyContentError, YamlDocumentParser};
