//! Scripted driver: generate a configuration from a sample request,
//! then apply an update to it.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use configen::adapters::ai::{GeminiConfig, GeminiProvider};
use configen::adapters::document::FilePersister;
use configen::adapters::reference::PdfReferenceExtractor;
use configen::application::{ConfigAgent, KnowledgeLoader};
use configen::config::AppConfig;
use configen::ports::TextGenerator;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let gemini = GeminiConfig::from_app_config(&config.ai)
        .ok_or("CONFIGEN__AI__API_KEY is not configured")?;
    let generator: Arc<dyn TextGenerator> = Arc::new(GeminiProvider::new(gemini)?);

    info!("initializing and loading documentation");
    let loader = KnowledgeLoader::new(generator.clone(), Arc::new(PdfReferenceExtractor::new()));
    let knowledge = loader.load(config.agent.reference_doc()).await;

    let sink = Arc::new(FilePersister::new(config.agent.output_dir()));
    let agent = ConfigAgent::new(generator, knowledge).with_sink(sink);

    println!("\nGenerating initial configuration...");
    let outcome = agent
        .process_request("Deploy a Node.js app with auto-scaling and 2GB RAM in a secured region")
        .await?;
    if let Some(path) = &outcome.saved_to {
        println!("Configuration saved to: {}", path.display());
    }

    println!("\nUpdating configuration...");
    let updated = agent
        .update_configuration(&outcome.document, "Increase CPU to 4 vCPUs and add GPU support")
        .await?;
    if let Some(path) = &updated.saved_to {
        println!("Updated configuration saved to: {}", path.display());
    }

    Ok(())
}
