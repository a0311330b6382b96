//! File-based export and import of the task collection
//!
//! Export writes a pretty-printed JSON array named `tasks-<date>.json`.
//! Import parses such a file back; anything whose root is not an array is
//! rejected. Applying an import is the caller's move, via
//! [`TaskStore::restore`](crate::task::TaskStore::restore) — a destructive
//! full replace, not a merge.

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use crate::task::Task;
use crate::{Error, Result};

/// Write `tasks` to a dated JSON file under `dir`, returning its path
pub async fn export(dir: impl AsRef<Path>, tasks: &[Task]) -> Result<PathBuf> {
    let content = serde_json::to_string_pretty(tasks)?;
    let filename = format!("tasks-{}.json", Local::now().format("%Y-%m-%d"));
    let path = dir.as_ref().join(filename);

    tokio::fs::create_dir_all(dir.as_ref()).await?;
    tokio::fs::write(&path, content).await?;

    info!("Exported {} tasks to {}", tasks.len(), path.display());
    Ok(path)
}

/// Read a task collection from an exported file
pub async fn import(path: impl AsRef<Path>) -> Result<Vec<Task>> {
    let content = tokio::fs::read_to_string(path.as_ref()).await?;
    parse(&content)
}

/// Parse exported JSON content into a task collection
pub fn parse(content: &str) -> Result<Vec<Task>> {
    let value: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| Error::Format(format!("not valid JSON: {}", e)))?;
    if !value.is_array() {
        return Err(Error::Format("expected a JSON array of tasks".to_string()));
    }
    serde_json::from_value(value).map_err(|e| Error::Format(format!("malformed task entry: {}", e)))
}
