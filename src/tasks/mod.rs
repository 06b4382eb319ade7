//! Task management.
//!
//! The task entity and its `SQLite`-backed store:
//! - Add/edit/delete/complete tasks
//! - Preset filters and substring search
//! - Completion history for the dashboard

pub mod storage;
pub mod task;

pub use storage::TaskStore;
pub use task::{Priority, Recurrence, Task, TaskStatus};
