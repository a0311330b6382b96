//! File-based storage gateway
//!
//! Stores each key as its own JSON file under a base directory.

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

use super::gateway::StorageGateway;
use crate::{Error, Result};

/// Storage gateway keeping one file per key
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a gateway rooted at `dir`
    ///
    /// The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

#[async_trait]
impl StorageGateway for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| Error::Storage(format!("Failed to read key {}: {}", key, e)))?;
        Ok(Some(content))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| Error::Storage(format!("Failed to create storage directory: {}", e)))?;
        let path = self.key_path(key);
        tokio::fs::write(&path, value)
            .await
            .map_err(|e| Error::Storage(format!("Failed to write key {}: {}", key, e)))?;
        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            tokio::fs::remove_file(&path)
                .await
                .map_err(|e| Error::Storage(format!("Failed to remove key {}: {}", key, e)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_get_missing_key() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path());

        assert_eq!(storage.get("tasks").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path());

        storage.set("tasks", "[]").await.unwrap();
        assert_eq!(storage.get("tasks").await.unwrap(), Some("[]".to_string()));

        // Overwrite replaces the previous value
        storage.set("tasks", "[1]").await.unwrap();
        assert_eq!(storage.get("tasks").await.unwrap(), Some("[1]".to_string()));
    }

    #[tokio::test]
    async fn test_remove() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path());

        storage.set("tasks", "[]").await.unwrap();
        storage.remove("tasks").await.unwrap();
        assert_eq!(storage.get("tasks").await.unwrap(), None);

        // Removing an absent key is not an error
        storage.remove("tasks").await.unwrap();
    }

    #[tokio::test]
    async fn test_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("data").join("store");
        let storage = FileStorage::new(&nested);

        storage.set("tasks", "[]").await.unwrap();
        assert!(nested.join("tasks.json").exists());
    }
}
