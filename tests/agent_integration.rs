//! End-to-end agent tests against the mock generator and a temporary
//! output directory.

use std::sync::Arc;

use serde_yaml::Value;

use configen::adapters::ai::MockTextGenerator;
use configen::adapters::document::FilePersister;
use configen::application::ConfigAgent;
use configen::domain::{ChatEntry, KnowledgeBase, SessionLog};

fn agent_with_sink(
    generator: &MockTextGenerator,
    dir: &std::path::Path,
) -> ConfigAgent {
    ConfigAgent::new(Arc::new(generator.clone()), KnowledgeBase::default())
        .with_sink(Arc::new(FilePersister::new(dir)))
}

#[tokio::test]
async fn process_request_generates_and_persists_configuration() {
    let dir = tempfile::tempdir().unwrap();
    let generator =
        MockTextGenerator::new().with_response("component: webapp\nreplicas: auto\nmemory: 2GB\n");
    let agent = agent_with_sink(&generator, dir.path());

    let outcome = agent
        .process_request("Deploy a Node.js app with auto-scaling and 2GB RAM")
        .await
        .unwrap();

    // Parsed document matches the model output.
    assert_eq!(
        outcome.document.get("component").and_then(Value::as_str),
        Some("webapp")
    );
    assert_eq!(
        outcome.document.get("replicas").and_then(Value::as_str),
        Some("auto")
    );
    assert_eq!(
        outcome.document.get("memory").and_then(Value::as_str),
        Some("2GB")
    );

    // Persisted under the request prefix with equivalent content.
    let path = outcome.saved_to.expect("persisted path");
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("icl_config_"));
    assert!(name.ends_with(".yaml"));

    let written: Value =
        serde_yaml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(&written, outcome.document.value());
}

#[tokio::test]
async fn update_preserves_existing_keys_and_persists_under_update_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let generator = MockTextGenerator::new()
        .with_response("component: webapp\nreplicas: auto\nmemory: 2GB\n")
        .with_response("component: webapp\nreplicas: auto\nmemory: 2GB\ncpu: 4vCPU\n");
    let agent = agent_with_sink(&generator, dir.path());

    let initial = agent
        .process_request("Deploy a Node.js app with auto-scaling and 2GB RAM")
        .await
        .unwrap();
    let updated = agent
        .update_configuration(&initial.document, "Increase CPU to 4 vCPUs")
        .await
        .unwrap();

    // Original keys preserved, new key added.
    for key in ["component", "replicas", "memory"] {
        assert_eq!(updated.document.get(key), initial.document.get(key));
    }
    assert_eq!(
        updated.document.get("cpu").and_then(Value::as_str),
        Some("4vCPU")
    );

    let path = updated.saved_to.expect("persisted path");
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("icl_config_updated_"));
}

#[tokio::test]
async fn fenced_and_commented_output_still_parses() {
    let dir = tempfile::tempdir().unwrap();
    let generator = MockTextGenerator::new()
        .with_response("```yaml\ncomponent: webapp # the app\n\nmemory: 2GB\n```\n");
    let agent = agent_with_sink(&generator, dir.path());

    let outcome = agent.process_request("deploy").await.unwrap();

    assert!(!outcome.document.is_error());
    assert_eq!(
        outcome.document.get("memory").and_then(Value::as_str),
        Some("2GB")
    );
}

#[tokio::test]
async fn parse_failures_persist_as_error_documents() {
    let dir = tempfile::tempdir().unwrap();
    let generator = MockTextGenerator::new().with_response(": : :");
    let agent = agent_with_sink(&generator, dir.path());

    let outcome = agent.process_request("deploy").await.unwrap();

    assert!(outcome.document.is_error());
    let written = std::fs::read_to_string(outcome.saved_to.unwrap()).unwrap();
    assert!(written.contains("Failed to parse YAML"));
    assert!(written.contains("timestamp"));
}

#[tokio::test]
async fn session_log_records_an_interactive_exchange() {
    let generator = MockTextGenerator::new().with_response("component: webapp\n");
    let agent = ConfigAgent::new(Arc::new(generator.clone()), KnowledgeBase::default());

    let mut session = SessionLog::new();
    let request = "Deploy a webapp";
    session.push_user(request);

    let outcome = agent.process_request(request).await.unwrap();
    session.push_bot(outcome.document.to_yaml().unwrap());
    session.push_download(outcome.document.to_data_uri().unwrap());

    let entries: Vec<_> = session.entries().collect();
    assert_eq!(entries.len(), 3);
    assert!(matches!(entries[0], ChatEntry::User { text } if text.as_str() == request));
    assert!(
        matches!(entries[1], ChatEntry::Bot { yaml } if yaml.contains("component: webapp"))
    );
    assert!(matches!(
        entries[2],
        ChatEntry::Download { link } if link.starts_with("data:application/x-yaml;base64,")
    ));
}

#[tokio::test]
async fn multi_document_output_is_wrapped_under_documents() {
    let dir = tempfile::tempdir().unwrap();
    let generator = MockTextGenerator::new().with_response("name: one\n---\nname: two\n");
    let agent = agent_with_sink(&generator, dir.path());

    let outcome = agent.process_request("deploy two things").await.unwrap();

    let docs = outcome.document.documents().expect("documents key");
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].get("name"), Some(&Value::String("one".into())));
    assert_eq!(docs[1].get("name"), Some(&Value::String("two".into())));
}
