//! Task model definitions

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// Maximum length of task text, in characters
pub const MAX_TEXT_LEN: usize = 200;

/// Task priority level
///
/// Ordered `Low < Medium < High` via [`Ord`], so priority sorting can
/// compare variants directly. The catch-all variant must be declared last,
/// so ordering comes from an explicit rank rather than declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    High,
    /// Unrecognized serialized values decode as `Medium`
    #[serde(other)]
    Medium,
}

impl Priority {
    fn rank(&self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable identity, generated at creation. Imported payloads that lack
    /// an id get a fresh one on decode.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    /// Set once at creation, never mutated afterwards
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Task {
    /// Create a new task with the given text
    ///
    /// The text is taken as-is; callers validate with [`validate_text`] first.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            completed: false,
            priority: Priority::default(),
            created_at: Utc::now(),
            due_date: None,
            category: None,
        }
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set the category label
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Whether the task is overdue as of `today`
    ///
    /// A task counts as overdue only while incomplete; completing it clears
    /// overdue status even if the due date has passed.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date.map(|due| due < today).unwrap_or(false)
    }
}

/// Validate and normalize task text
///
/// Returns the trimmed text, or a validation error when the trimmed text is
/// empty or longer than [`MAX_TEXT_LEN`] characters.
pub fn validate_text(text: &str) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation("task text cannot be empty".to_string()));
    }
    if trimmed.chars().count() > MAX_TEXT_LEN {
        return Err(Error::Validation(format!(
            "task text exceeds {} characters",
            MAX_TEXT_LEN
        )));
    }
    Ok(trimmed.to_string())
}
