//! Terminal user interface for the Pomodoro timer.
//!
//! Hosts the timer state machine: draws the countdown and gauge, maps
//! keys to controller operations, and dispatches one tick per wall-clock
//! second while the timer runs. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, StatusPresenter};

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::TaskdeckError;
use crate::pomodoro::SessionKind;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run() -> Result<(), TaskdeckError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| TaskdeckError::Config(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| TaskdeckError::Config(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| TaskdeckError::Config(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let result = App::new().and_then(|mut app| run_app(&mut terminal, &mut app));

    // Restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), TaskdeckError> {
    let tick_rate = Duration::from_secs(1);
    let mut last_tick = Instant::now();

    loop {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| TaskdeckError::Config(format!("Failed to draw: {e}")))?;

        // Handle events (polls with a short timeout)
        if let Some(action) = event::handle_events()? {
            match action {
                event::Action::Quit => app.should_quit = true,
                event::Action::Start => {
                    app.start();
                    last_tick = Instant::now();
                }
                event::Action::Pause => app.pause(),
                event::Action::Stop => app.stop(),
                event::Action::AdjustWork(delta) => {
                    app.adjust_duration(SessionKind::Work, delta)?;
                }
                event::Action::AdjustBreak(delta) => {
                    app.adjust_duration(SessionKind::Break, delta)?;
                }
            }
        }

        // Dispatch one tick per elapsed second while running
        if app.is_running() {
            if last_tick.elapsed() >= tick_rate {
                app.tick();
                last_tick = Instant::now();
            }
        } else {
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
