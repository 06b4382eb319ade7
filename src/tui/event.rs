//! Event handling for the Pomodoro TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::error::TaskdeckError;

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or resume the timer.
    Start,
    /// Pause the timer.
    Pause,
    /// Stop the timer.
    Stop,
    /// Change the work duration by whole minutes.
    AdjustWork(i64),
    /// Change the break duration by whole minutes.
    AdjustBreak(i64),
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed. Polling
/// uses a short timeout so the caller's tick loop keeps moving.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events() -> Result<Option<Action>, TaskdeckError> {
    if event::poll(Duration::from_millis(100))
        .map_err(|e| TaskdeckError::Config(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) = event::read()
            .map_err(|e| TaskdeckError::Config(format!("Event read failed: {e}")))?
        {
            // Handle Ctrl+C
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Some(Action::Quit));
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(Action::Quit)),

                // Timer controls
                KeyCode::Char('s') | KeyCode::Enter => return Ok(Some(Action::Start)),
                KeyCode::Char('p') | KeyCode::Char(' ') => return Ok(Some(Action::Pause)),
                KeyCode::Char('x') => return Ok(Some(Action::Stop)),

                // Live duration adjustment
                KeyCode::Char('[') => return Ok(Some(Action::AdjustWork(-1))),
                KeyCode::Char(']') => return Ok(Some(Action::AdjustWork(1))),
                KeyCode::Char('{') => return Ok(Some(Action::AdjustBreak(-1))),
                KeyCode::Char('}') => return Ok(Some(Action::AdjustBreak(1))),

                _ => {}
            }
        }
    }

    Ok(None)
}
