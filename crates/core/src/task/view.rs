//! Pure projections over the task collection
//!
//! Filtering, searching, and sorting never touch persisted state; the store
//! decides what to do with the results.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::model::Task;

/// Named filter predicates over the task collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    All,
    Active,
    Completed,
    Overdue,
}

impl Default for Filter {
    fn default() -> Self {
        Self::All
    }
}

/// Sort orders for the task collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    CreationDate,
    Priority,
    DueDate,
    Alphabetical,
}

impl Default for SortKey {
    fn default() -> Self {
        Self::CreationDate
    }
}

/// Project the subset of tasks matching `filter`
///
/// `today` anchors the overdue comparison so callers control the clock.
pub fn apply_filter(tasks: &[Task], filter: Filter, today: NaiveDate) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| match filter {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
            Filter::Overdue => task.is_overdue(today),
        })
        .cloned()
        .collect()
}

/// Case-insensitive substring search against task text
pub fn search(tasks: &[Task], term: &str) -> Vec<Task> {
    let needle = term.to_lowercase();
    tasks
        .iter()
        .filter(|task| task.text.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Re-order tasks in place by the given key
///
/// All sorts are stable: equal elements keep their prior relative order.
/// Tasks without a due date sort after all dated ones.
pub fn sort_tasks(tasks: &mut [Task], key: SortKey) {
    match key {
        // Most recent first
        SortKey::CreationDate => tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Priority => tasks.sort_by(|a, b| b.priority.cmp(&a.priority)),
        SortKey::DueDate => tasks.sort_by(|a, b| match (a.due_date, b.due_date) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
        SortKey::Alphabetical => {
            tasks.sort_by(|a, b| a.text.to_lowercase().cmp(&b.text.to_lowercase()))
        }
    }
}
