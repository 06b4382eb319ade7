//! Pomodoro command implementation.
//!
//! Launches the full-screen timer. The timer reads its durations from the
//! settings store and persists live adjustments back to it.

use crate::error::TaskdeckError;
use crate::tui;

/// Run the Pomodoro timer TUI.
pub fn pomodoro() -> Result<String, TaskdeckError> {
    tui::run()?;
    Ok(String::new())
}
