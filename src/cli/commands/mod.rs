//! Command implementations.

mod backup;
mod completions;
mod pomodoro;
mod settings;
mod stats;
mod task;

pub use backup::{backup, restore};
pub use completions::completions;
pub use pomodoro::pomodoro;
pub use settings::settings;
pub use stats::stats;
pub use task::{add, complete, delete, edit, list, search, show};
