//! File persister - writes configuration documents to durable storage.
//!
//! One file per generation or update, named
//! `<prefix>_<YYYYMMDD_HHMMSS>.yaml`, UTF-8, block-style YAML with
//! insertion-ordered keys. Artifacts are write-once; timestamped names
//! keep concurrent saves from colliding in the common case.

use async_trait::async_trait;
use chrono::Local;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info};

use crate::domain::ConfigDocument;
use crate::ports::{ConfigSink, PersistError};

/// Prefix used when the caller supplies none.
const DEFAULT_PREFIX: &str = "config";

/// File-based configuration sink.
#[derive(Debug, Clone)]
pub struct FilePersister {
    output_dir: PathBuf,
}

impl FilePersister {
    /// Creates a persister rooted at the given output directory.
    ///
    /// The directory is created on first save if it does not exist.
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Returns the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn artifact_path(&self, prefix: Option<&str>) -> PathBuf {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!("{}_{}.yaml", prefix.unwrap_or(DEFAULT_PREFIX), timestamp);
        self.output_dir.join(filename)
    }
}

#[async_trait]
impl ConfigSink for FilePersister {
    async fn save(
        &self,
        document: &ConfigDocument,
        prefix: Option<&str>,
    ) -> Result<PathBuf, PersistError> {
        let yaml = document
            .to_yaml()
            .map_err(|e| PersistError::serialization(e.to_string()))?;

        if let Err(err) = fs::create_dir_all(&self.output_dir).await {
            error!(dir = %self.output_dir.display(), error = %err, "failed to create output directory");
            return Err(err.into());
        }

        let path = self.artifact_path(prefix);
        if let Err(err) = fs::write(&path, yaml).await {
            error!(path = %path.display(), error = %err, "failed to write configuration");
            return Err(err.into());
        }

        info!(path = %path.display(), "configuration saved");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    fn document(yaml: &str) -> ConfigDocument {
        ConfigDocument::new(serde_yaml::from_str::<Value>(yaml).unwrap())
    }

    #[tokio::test]
    async fn saves_with_prefix_and_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let persister = FilePersister::new(dir.path());

        let path = persister
            .save(&document("component: webapp\n"), Some("icl_config"))
            .await
            .unwrap();

        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("icl_config_"));
        assert!(name.ends_with(".yaml"));

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("component: webapp"));
    }

    #[tokio::test]
    async fn default_prefix_is_config() {
        let dir = tempfile::tempdir().unwrap();
        let persister = FilePersister::new(dir.path());

        let path = persister.save(&document("a: 1\n"), None).await.unwrap();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("config_"));
    }

    #[tokio::test]
    async fn creates_missing_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("configs");
        let persister = FilePersister::new(&nested);

        persister.save(&document("a: 1\n"), None).await.unwrap();
        assert!(nested.is_dir());
    }

    #[tokio::test]
    async fn written_yaml_preserves_key_order() {
        let dir = tempfile::tempdir().unwrap();
        let persister = FilePersister::new(dir.path());

        let path = persister
            .save(&document("zebra: 1\nalpha: 2\n"), None)
            .await
            .unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.find("zebra").unwrap() < written.find("alpha").unwrap());
    }
}
