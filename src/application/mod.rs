//! Application layer - orchestration over the domain and ports.

mod agent;
mod knowledge_loader;

pub use agent::{AgentError, ConfigAgent, GenerationOutcome};
pub use knowledge_loader::{KnowledgeLoader, KnowledgeLoadError};
