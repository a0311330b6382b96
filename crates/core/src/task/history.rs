//! Bounded linear undo/redo history
//!
//! Each entry is a full snapshot of the task collection. The history keeps a
//! cursor at the currently-active entry; pushing a new snapshot discards any
//! redo branch beyond the cursor.

use crate::{Error, Result};

use super::model::Task;

/// Maximum number of snapshots retained
pub const HISTORY_CAPACITY: usize = 50;

/// Bounded sequence of task-collection snapshots plus a cursor
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<Vec<Task>>,
    cursor: usize,
}

impl History {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history seeded with an initial snapshot at the cursor
    pub fn seeded(snapshot: Vec<Task>) -> Self {
        Self {
            entries: vec![snapshot],
            cursor: 0,
        }
    }

    /// Record a new snapshot after a mutation
    ///
    /// Truncates any entries beyond the cursor, appends, and advances the
    /// cursor. When the capacity is exceeded the oldest entry is evicted and
    /// the cursor adjusted so it still addresses the same logical entry.
    pub fn push(&mut self, snapshot: Vec<Task>) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(snapshot);
        self.cursor = self.entries.len() - 1;

        if self.entries.len() > HISTORY_CAPACITY {
            self.entries.remove(0);
            self.cursor -= 1;
        }
    }

    /// Step the cursor back and return the snapshot there
    pub fn undo(&mut self) -> Result<&[Task]> {
        if self.cursor == 0 || self.entries.is_empty() {
            return Err(Error::NoHistory("nothing to undo".to_string()));
        }
        self.cursor -= 1;
        Ok(&self.entries[self.cursor])
    }

    /// Step the cursor forward and return the snapshot there
    pub fn redo(&mut self) -> Result<&[Task]> {
        if self.entries.is_empty() || self.cursor + 1 >= self.entries.len() {
            return Err(Error::NoHistory("nothing to redo".to_string()));
        }
        self.cursor += 1;
        Ok(&self.entries[self.cursor])
    }

    /// Whether the cursor has an entry before it
    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty() && self.cursor > 0
    }

    /// Whether the cursor has an entry after it
    pub fn can_redo(&self) -> bool {
        !self.entries.is_empty() && self.cursor + 1 < self.entries.len()
    }

    /// Number of retained snapshots
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the currently-active entry
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
