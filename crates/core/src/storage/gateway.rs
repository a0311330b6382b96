//! Storage gateway trait
//!
//! Defines the key-value interface the task store persists through.

use async_trait::async_trait;

use crate::Result;

/// Key holding the JSON-encoded task collection
pub const TASKS_KEY: &str = "tasks";

/// Key holding the stringified dark-mode preference
pub const DARK_MODE_KEY: &str = "darkMode";

/// Key-value interface for durable storage
#[async_trait]
pub trait StorageGateway: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value under `key`; absent keys are not an error
    async fn remove(&self, key: &str) -> Result<()>;
}
