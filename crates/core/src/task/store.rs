//! The task store
//!
//! Owns the canonical ordered task collection, the undo/redo history, and the
//! current view settings. Every mutation funnels through here: the collection
//! is updated in memory, written through the storage gateway, and recorded as
//! a history snapshot.

use chrono::{Local, NaiveDate};
use tracing::{debug, info};
use uuid::Uuid;

use crate::storage::{StorageGateway, TASKS_KEY};
use crate::{Error, Result};

use super::history::History;
use super::model::{validate_text, Priority, Task};
use super::view::{self, Filter, SortKey};

/// Task store backed by a key-value storage gateway
///
/// The store exclusively owns its state; callers mutate it only through the
/// operations below. Undo and redo navigate the history without extending it,
/// every other mutation appends exactly one snapshot.
pub struct TaskStore {
    tasks: Vec<Task>,
    history: History,
    current_filter: Filter,
    current_sort: SortKey,
    gateway: Box<dyn StorageGateway>,
}

impl TaskStore {
    /// Hydrate a store from the gateway
    ///
    /// Missing storage yields an empty collection. The loaded state is seeded
    /// as history entry zero so the first undo after a mutation can return to
    /// it.
    pub async fn load(gateway: Box<dyn StorageGateway>) -> Result<Self> {
        let tasks: Vec<Task> = match gateway.get(TASKS_KEY).await? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };
        debug!("Loaded {} tasks from storage", tasks.len());

        Ok(Self {
            history: History::seeded(tasks.clone()),
            tasks,
            current_filter: Filter::default(),
            current_sort: SortKey::default(),
            gateway,
        })
    }

    /// The current task collection, in render order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn current_filter(&self) -> Filter {
        self.current_filter
    }

    pub fn current_sort(&self) -> SortKey {
        self.current_sort
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Write the collection through the gateway
    async fn persist(&self) -> Result<()> {
        let content = serde_json::to_string(&self.tasks)?;
        self.gateway.set(TASKS_KEY, &content).await
    }

    /// Persist and record a history snapshot, in that order
    async fn commit(&mut self) -> Result<()> {
        self.persist().await?;
        self.history.push(self.tasks.clone());
        Ok(())
    }

    fn find_index(&self, id: Uuid) -> Result<usize> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| Error::TaskNotFound(id.to_string()))
    }

    /// Create a task and append it to the collection
    pub async fn add(
        &mut self,
        text: &str,
        priority: Priority,
        due_date: Option<NaiveDate>,
        category: Option<String>,
    ) -> Result<Task> {
        let text = validate_text(text)?;
        let mut task = Task::new(text).with_priority(priority);
        if let Some(due) = due_date {
            task = task.with_due_date(due);
        }
        if let Some(category) = category {
            task = task.with_category(category);
        }

        self.tasks.push(task.clone());
        self.commit().await?;
        info!("Added task {}", task.id);
        Ok(task)
    }

    /// Replace a task's text, leaving identity and timestamps untouched
    pub async fn edit(&mut self, id: Uuid, new_text: &str) -> Result<Task> {
        let text = validate_text(new_text)?;
        let index = self.find_index(id)?;
        self.tasks[index].text = text;
        let task = self.tasks[index].clone();
        self.commit().await?;
        debug!("Edited task {}", id);
        Ok(task)
    }

    /// Flip a task's completion state
    pub async fn toggle_complete(&mut self, id: Uuid) -> Result<Task> {
        let index = self.find_index(id)?;
        self.tasks[index].completed = !self.tasks[index].completed;
        let task = self.tasks[index].clone();
        self.commit().await?;
        debug!("Toggled task {} to completed={}", id, task.completed);
        Ok(task)
    }

    /// Mark every currently-incomplete task in `ids` as completed
    ///
    /// Returns how many tasks changed. A batch that changes nothing leaves
    /// storage and history untouched. The whole batch records a single
    /// history entry.
    pub async fn bulk_complete(&mut self, ids: &[Uuid]) -> Result<usize> {
        let mut count = 0;
        for id in ids {
            if let Some(task) = self.tasks.iter_mut().find(|t| t.id == *id) {
                if !task.completed {
                    task.completed = true;
                    count += 1;
                }
            }
        }

        if count > 0 {
            self.commit().await?;
            info!("Bulk-completed {} tasks", count);
        }
        Ok(count)
    }

    /// Remove a task from the collection
    pub async fn remove(&mut self, id: Uuid) -> Result<()> {
        let index = self.find_index(id)?;
        let task = self.tasks.remove(index);
        self.commit().await?;
        info!("Removed task {}", task.id);
        Ok(())
    }

    /// Empty the collection unconditionally
    ///
    /// Confirmation is a caller concern. This is the one operation that
    /// removes the storage key instead of rewriting it.
    pub async fn clear(&mut self) -> Result<()> {
        self.tasks.clear();
        self.gateway.remove(TASKS_KEY).await?;
        self.history.push(self.tasks.clone());
        info!("Cleared all tasks");
        Ok(())
    }

    /// Step back to the previous snapshot
    ///
    /// Replaces the live collection and persists it; the history cursor moves
    /// without a new entry being appended.
    pub async fn undo(&mut self) -> Result<&[Task]> {
        self.tasks = self.history.undo()?.to_vec();
        self.persist().await?;
        debug!("Undo to {} tasks", self.tasks.len());
        Ok(&self.tasks)
    }

    /// Step forward to the snapshot that was undone
    pub async fn redo(&mut self) -> Result<&[Task]> {
        self.tasks = self.history.redo()?.to_vec();
        self.persist().await?;
        debug!("Redo to {} tasks", self.tasks.len());
        Ok(&self.tasks)
    }

    /// Re-order the live collection by `key` and persist the new order
    pub async fn sort(&mut self, key: SortKey) -> Result<&[Task]> {
        self.current_sort = key;
        view::sort_tasks(&mut self.tasks, key);
        self.commit().await?;
        Ok(&self.tasks)
    }

    /// Project the subset matching `filter`, recording it as the current one
    ///
    /// Pure with respect to the collection: nothing is persisted.
    pub fn filter(&mut self, filter: Filter) -> Vec<Task> {
        self.current_filter = filter;
        view::apply_filter(&self.tasks, filter, Local::now().date_naive())
    }

    /// Case-insensitive substring search over task text
    pub fn search(&self, term: &str) -> Vec<Task> {
        view::search(&self.tasks, term)
    }

    /// Replace the entire collection, e.g. after an import
    ///
    /// Destructive full replace, not a merge. Persists and records one
    /// history entry, so the replace itself can be undone.
    pub async fn restore(&mut self, tasks: Vec<Task>) -> Result<()> {
        self.tasks = tasks;
        self.commit().await?;
        info!("Restored collection with {} tasks", self.tasks.len());
        Ok(())
    }

    /// Distinct category labels in use, sorted
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .tasks
            .iter()
            .filter_map(|t| t.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }
}
