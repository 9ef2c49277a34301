//! Config agent - orchestrates prompt building, generation, cleanup,
//! parsing, and optional persistence.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{error, info};

use crate::adapters::document::{ResponseSanitizer, YamlDocumentParser};
use crate::domain::{ConfigDocument, KnowledgeBase};
use crate::ports::{ConfigSink, GenerationError, PersistError, PromptPart, TextGenerator};

/// Artifact prefix for freshly generated configurations.
const REQUEST_PREFIX: &str = "icl_config";

/// Artifact prefix for updated configurations.
const UPDATE_PREFIX: &str = "icl_config_updated";

/// Errors from agent operations.
///
/// Parse failures never appear here: they are recovered into error
/// documents at the parse boundary. Generation and persistence failures
/// are propagated unchanged.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    /// The remote generation call failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Persisting the generated document failed.
    #[error(transparent)]
    Persistence(#[from] PersistError),

    /// Serializing a document or the knowledge base for a prompt failed.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Result of a generation or update operation.
#[derive(Debug)]
pub struct GenerationOutcome {
    /// The parsed configuration document (possibly an error document).
    pub document: ConfigDocument,
    /// Where the document was persisted, when a sink is configured.
    pub saved_to: Option<PathBuf>,
}

/// Orchestrates configuration generation against a text-generation
/// service, grounded by an in-context knowledge base.
///
/// The knowledge base is owned exclusively by the agent and never
/// mutated after construction, so the agent is safe to share across
/// concurrent callers.
pub struct ConfigAgent {
    generator: Arc<dyn TextGenerator>,
    knowledge: KnowledgeBase,
    sink: Option<Arc<dyn ConfigSink>>,
}

impl ConfigAgent {
    /// Creates an agent with the given knowledge base.
    ///
    /// Pass [`KnowledgeBase::default()`] to skip the extraction pass;
    /// that is a legitimate alternate initial state, used by interactive
    /// surfaces.
    pub fn new(generator: Arc<dyn TextGenerator>, knowledge: KnowledgeBase) -> Self {
        Self {
            generator,
            knowledge,
            sink: None,
        }
    }

    /// Configures a persistence sink. Operations then save each result
    /// under their operation-specific prefix.
    pub fn with_sink(mut self, sink: Arc<dyn ConfigSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Returns the agent's knowledge base.
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Generates a configuration document from a free-text request.
    ///
    /// # Errors
    ///
    /// Generation and persistence failures are logged and propagated
    /// unchanged; parse failures surface as an error document instead.
    pub async fn process_request(&self, user_text: &str) -> Result<GenerationOutcome, AgentError> {
        info!(request = user_text, "processing request");

        let prompt = self.request_prompt(user_text)?;
        self.run_pipeline(prompt, REQUEST_PREFIX).await
    }

    /// Updates an existing configuration from a natural-language change
    /// request, preserving unrelated settings.
    pub async fn update_configuration(
        &self,
        current: &ConfigDocument,
        update_text: &str,
    ) -> Result<GenerationOutcome, AgentError> {
        info!(update = update_text, "processing update");

        let prompt = self.update_prompt(current, update_text)?;
        self.run_pipeline(prompt, UPDATE_PREFIX).await
    }

    /// Shared generate → sanitize → parse → persist pipeline.
    async fn run_pipeline(
        &self,
        prompt: String,
        prefix: &str,
    ) -> Result<GenerationOutcome, AgentError> {
        let raw = self
            .generator
            .generate(&[PromptPart::text(prompt)])
            .await
            .map_err(|err| {
                error!(provider = self.generator.name(), error = %err, "generation failed");
                err
            })?;

        let cleaned = ResponseSanitizer::clean(&raw);
        let document = YamlDocumentParser::parse(&cleaned)
            .unwrap_or_else(|err| ConfigDocument::error(err.to_string()));

        let saved_to = match &self.sink {
            Some(sink) => Some(sink.save(&document, Some(prefix)).await?),
            None => None,
        };

        Ok(GenerationOutcome { document, saved_to })
    }

    fn request_prompt(&self, user_text: &str) -> Result<String, AgentError> {
        let knowledge = self.knowledge_yaml()?;
        Ok(format!(
            "Generate a YAML configuration based on this request: {user_text}\n\
             \n\
             Knowledge base:\n\
             {knowledge}\n\
             \n\
             Requirements:\n\
             - Output **only valid YAML**, without markdown or extra text.\n\
             - Ensure all necessary components are included.\n\
             - Follow security and best practices.\n\
             - Use proper indentation.\n\
             \n\
             Response must be **pure YAML** with no extra formatting.\n"
        ))
    }

    fn update_prompt(
        &self,
        current: &ConfigDocument,
        update_text: &str,
    ) -> Result<String, AgentError> {
        let current_yaml = current
            .to_yaml()
            .map_err(|e| AgentError::Serialization(e.to_string()))?;
        let knowledge = self.knowledge_yaml()?;
        Ok(format!(
            "Update this configuration:\n\
             {current_yaml}\n\
             \n\
             With these changes: {update_text}\n\
             \n\
             Knowledge base:\n\
             {knowledge}\n\
             \n\
             Requirements:\n\
             - Maintain existing valid settings.\n\
             - Update only the necessary parts.\n\
             - Ensure structure and format remain valid.\n\
             - Ensure correct indentation.\n\
             \n\
             Response must be **pure YAML** with no extra text.\n"
        ))
    }

    fn knowledge_yaml(&self) -> Result<String, AgentError> {
        self.knowledge
            .to_yaml()
            .map_err(|e| AgentError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockTextGenerator;
    use serde_yaml::Value;

    fn agent(generator: &MockTextGenerator) -> ConfigAgent {
        ConfigAgent::new(Arc::new(generator.clone()), KnowledgeBase::default())
    }

    #[tokio::test]
    async fn process_request_parses_model_output() {
        let generator =
            MockTextGenerator::new().with_response("component: webapp\nreplicas: auto\n");
        let outcome = agent(&generator)
            .process_request("Deploy a Node.js app")
            .await
            .unwrap();

        assert_eq!(
            outcome.document.get("component").and_then(Value::as_str),
            Some("webapp")
        );
        assert!(outcome.saved_to.is_none());
    }

    #[tokio::test]
    async fn request_prompt_embeds_user_text_and_knowledge() {
        let generator = MockTextGenerator::new().with_response("a: 1\n");
        agent(&generator)
            .process_request("Deploy a webapp")
            .await
            .unwrap();

        let prompt = generator.prompt_text(0).unwrap();
        assert!(prompt.contains("Deploy a webapp"));
        assert!(prompt.contains("Knowledge base:"));
        assert!(prompt.contains("schema:"));
        assert!(prompt.contains("pure YAML"));
    }

    #[tokio::test]
    async fn update_prompt_embeds_current_document() {
        let generator = MockTextGenerator::new().with_response("component: webapp\ncpu: 4vCPU\n");
        let current =
            ConfigDocument::new(serde_yaml::from_str("component: webapp\n").unwrap());

        agent(&generator)
            .update_configuration(&current, "Increase CPU to 4 vCPUs")
            .await
            .unwrap();

        let prompt = generator.prompt_text(0).unwrap();
        assert!(prompt.contains("Update this configuration:"));
        assert!(prompt.contains("component: webapp"));
        assert!(prompt.contains("Increase CPU to 4 vCPUs"));
        assert!(prompt.contains("Maintain existing valid settings."));
    }

    #[tokio::test]
    async fn fenced_output_is_sanitized_before_parsing() {
        let generator =
            MockTextGenerator::new().with_response("```yaml\ncomponent: webapp\n```\n");
        let outcome = agent(&generator).process_request("deploy").await.unwrap();

        assert!(!outcome.document.is_error());
        assert_eq!(
            outcome.document.get("component").and_then(Value::as_str),
            Some("webapp")
        );
    }

    #[tokio::test]
    async fn unparsable_output_becomes_error_document() {
        let generator = MockTextGenerator::new().with_response(": : :");
        let outcome = agent(&generator).process_request("deploy").await.unwrap();

        assert!(outcome.document.is_error());
    }

    #[tokio::test]
    async fn empty_output_becomes_error_document() {
        let generator = MockTextGenerator::new().with_response("");
        let outcome = agent(&generator).process_request("deploy").await.unwrap();

        assert!(outcome.document.is_error());
        assert_eq!(
            outcome.document.get("error").and_then(Value::as_str),
            Some("empty YAML content")
        );
    }

    #[tokio::test]
    async fn generation_errors_propagate_unchanged() {
        let generator = MockTextGenerator::new().with_error(GenerationError::RateLimited);
        let err = agent(&generator)
            .process_request("deploy")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AgentError::Generation(GenerationError::RateLimited)
        ));
    }
}
