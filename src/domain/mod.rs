//! Domain types: knowledge base, configuration documents, session log.

mod document;
mod knowledge;
mod session;

pub use document::ConfigDocument;
pub use knowledge::{KnowledgeBase, KnowledgeStructureError, SECTION_NAMES};
pub use session::{ChatEntry, SessionLog};
