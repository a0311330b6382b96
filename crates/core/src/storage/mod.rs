//! Persistence gateways
//!
//! Durable storage is a string-keyed, string-valued contract; the task store
//! never sees where values actually live.

mod file;
mod gateway;
mod memory;
mod preferences;

pub use file::FileStorage;
pub use gateway::{StorageGateway, DARK_MODE_KEY, TASKS_KEY};
pub use memory::MemoryStorage;
pub use preferences::{dark_mode, set_dark_mode};
