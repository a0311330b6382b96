//! Task module
//!
//! This module contains task-related types and logic.

mod history;
mod model;
mod store;
mod view;

pub use history::{History, HISTORY_CAPACITY};
pub use model::*;
pub use store::TaskStore;
pub use view::{apply_filter, search, sort_tasks, Filter, SortKey};
