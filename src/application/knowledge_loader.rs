//! Knowledge loader - populates the knowledge base from a reference
//! document via one extraction pass through the generative model.
//!
//! Loading never fails outright: any failure falls back to the static
//! default knowledge base so agent construction always succeeds. The
//! failure kind is classified and logged for diagnosability rather than
//! swallowed by a single catch-all.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::adapters::document::{ResponseSanitizer, YamlDocumentParser};
use crate::domain::{KnowledgeBase, KnowledgeStructureError};
use crate::ports::{
    ExtractError, GenerationError, PromptPart, ReferenceExtractor, TextGenerator,
};

/// Fixed instructional prompt for the extraction pass. Asks the model to
/// emit exactly the four-section knowledge structure.
const EXTRACTION_PROMPT: &str = "\
Extract key information from the documentation and format it as YAML with the following structure:
schema:
  components: []
  parameters: []
rules:
  validation: []
  security: []
practices:
  deployment: []
  configuration: []
patterns:
  common: []
  recommended: []

Output **only valid YAML**, without markdown formatting or extra text.
";

/// Why a knowledge extraction pass failed.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeLoadError {
    /// The reference document does not exist.
    #[error("reference document missing: {0}")]
    MissingReference(ExtractError),

    /// Text extraction from the reference document failed.
    #[error("text extraction failed: {0}")]
    Extraction(ExtractError),

    /// The remote generation call failed.
    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),

    /// The model output did not parse as YAML.
    #[error("extracted knowledge did not parse: {0}")]
    Parse(String),

    /// The parsed value had an invalid shape.
    #[error("invalid knowledge structure: {0}")]
    Structure(#[from] KnowledgeStructureError),
}

impl KnowledgeLoadError {
    /// Short failure kind for structured logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingReference(_) => "missing_reference",
            Self::Extraction(_) => "extraction",
            Self::Generation(_) => "generation",
            Self::Parse(_) => "parse",
            Self::Structure(_) => "structure",
        }
    }
}

impl From<ExtractError> for KnowledgeLoadError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::NotFound { .. } => Self::MissingReference(err),
            ExtractError::Extraction(_) => Self::Extraction(err),
        }
    }
}

/// Populates a [`KnowledgeBase`] from a reference document.
pub struct KnowledgeLoader {
    generator: Arc<dyn TextGenerator>,
    extractor: Arc<dyn ReferenceExtractor>,
}

impl KnowledgeLoader {
    /// Creates a loader over the given generator and extractor.
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        extractor: Arc<dyn ReferenceExtractor>,
    ) -> Self {
        Self {
            generator,
            extractor,
        }
    }

    /// Loads the knowledge base, falling back to the static default on
    /// any failure. Never raises.
    pub async fn load(&self, reference_doc: &Path) -> KnowledgeBase {
        info!(path = %reference_doc.display(), "reading reference documentation");

        match self.try_load(reference_doc).await {
            Ok(knowledge) => {
                info!("reference documentation processed");
                knowledge
            }
            Err(err) => {
                warn!(
                    kind = err.kind(),
                    error = %err,
                    "knowledge extraction failed, using default knowledge base"
                );
                KnowledgeBase::default()
            }
        }
    }

    async fn try_load(&self, reference_doc: &Path) -> Result<KnowledgeBase, KnowledgeLoadError> {
        // Missing reference surfaces before any remote call is made.
        let content = self.extractor.extract_text(reference_doc)?;

        let parts = [
            PromptPart::text(EXTRACTION_PROMPT),
            PromptPart::text(content),
        ];
        let raw = self.generator.generate(&parts).await?;

        let cleaned = ResponseSanitizer::clean(&raw);
        let document = YamlDocumentParser::parse(&cleaned)
            .map_err(|e| KnowledgeLoadError::Parse(e.to_string()))?;
        if document.is_error() {
            return Err(KnowledgeLoadError::Parse(
                "model output was not valid YAML".to_string(),
            ));
        }

        Ok(KnowledgeBase::from_value(document.into_value())?)
    }
}
