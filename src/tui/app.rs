//! Application state for the Pomodoro TUI.

use chrono::Duration;

use crate::error::TaskdeckError;
use crate::pomodoro::{ControllerState, PomodoroController, Presenter, SessionKind, TimerSession};
use crate::storage::{DurationSetting, SettingsStore};

/// Longest duration the TUI lets you dial in, in minutes.
const MAX_MINUTES: i64 = 180;

/// Presenter that turns timer notifications into status-bar messages.
#[derive(Debug, Default)]
pub struct StatusPresenter {
    /// Latest message to show, if any.
    pub status: Option<String>,
}

impl Presenter for StatusPresenter {
    fn on_session_completed(&mut self, finished: SessionKind) {
        self.status = Some(match finished {
            SessionKind::Work => "Great work! Time for a break 🎉 (s to start)".to_string(),
            SessionKind::Break => "Break's over! Back to work? 💪 (s to start)".to_string(),
        });
    }

    fn on_reconfigured(&mut self, kind: SessionKind, planned_seconds: i64, _remaining: i64) {
        self.status = Some(format!(
            "{kind} duration is now {} minutes",
            planned_seconds / 60
        ));
    }

    fn on_state_changed(&mut self, state: ControllerState, _kind: SessionKind) {
        self.status = match state {
            ControllerState::Running => None,
            ControllerState::Paused => Some("Paused".to_string()),
            ControllerState::Idle => Some("Stopped - reset to a fresh Work session".to_string()),
        };
    }
}

/// Application state.
pub struct App {
    controller: PomodoroController<StatusPresenter>,
    settings: SettingsStore,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create the app with durations loaded from the settings store.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be read.
    pub fn new() -> Result<Self, TaskdeckError> {
        Self::with_settings(SettingsStore::new()?)
    }

    /// Create the app over an existing settings store (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be read.
    pub fn with_settings(settings: SettingsStore) -> Result<Self, TaskdeckError> {
        let work = settings.duration_minutes(DurationSetting::Work)?;
        let break_ = settings.duration_minutes(DurationSetting::Break)?;

        let controller = PomodoroController::new(
            Duration::minutes(i64::from(work)),
            Duration::minutes(i64::from(break_)),
            StatusPresenter::default(),
        );

        Ok(Self {
            controller,
            settings,
            should_quit: false,
        })
    }

    /// The current timer session.
    #[must_use]
    pub const fn session(&self) -> &TimerSession {
        self.controller.session()
    }

    /// The current controller state.
    #[must_use]
    pub const fn state(&self) -> ControllerState {
        self.controller.state()
    }

    /// Whether ticks should be dispatched.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state(), ControllerState::Running)
    }

    /// The configured duration for a kind, in minutes.
    #[must_use]
    pub const fn configured_minutes(&self, kind: SessionKind) -> i64 {
        self.controller.configured_seconds(kind) / 60
    }

    /// The latest status message.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.controller.presenter().status.as_deref()
    }

    /// Start or resume the timer.
    pub fn start(&mut self) {
        self.controller.start();
    }

    /// Pause the timer.
    pub fn pause(&mut self) {
        self.controller.pause();
    }

    /// Stop the timer and reset to a fresh Work session.
    pub fn stop(&mut self) {
        self.controller.stop();
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) {
        self.controller.tick();
    }

    /// Adjust a configured duration by whole minutes, persist it, and
    /// apply it to the timer.
    ///
    /// The live session is rebased so elapsed progress is preserved; if
    /// the new duration is already exceeded the session completes.
    ///
    /// # Errors
    ///
    /// Returns an error if the setting cannot be persisted.
    pub fn adjust_duration(&mut self, kind: SessionKind, delta_minutes: i64) -> Result<(), TaskdeckError> {
        let minutes = (self.configured_minutes(kind) + delta_minutes).clamp(1, MAX_MINUTES);

        self.settings
            .set_duration_minutes(DurationSetting::from(kind), u32::try_from(minutes).unwrap_or(1))?;

        self.controller
            .reconfigure(kind, Duration::minutes(minutes));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;

    fn test_app() -> App {
        let settings = SettingsStore::with_database(Database::open_in_memory().unwrap());
        App::with_settings(settings).unwrap()
    }

    #[test]
    fn test_app_starts_idle_with_defaults() {
        let app = test_app();
        assert_eq!(app.state(), ControllerState::Idle);
        assert_eq!(app.configured_minutes(SessionKind::Work), 25);
        assert_eq!(app.configured_minutes(SessionKind::Break), 5);
    }

    #[test]
    fn test_start_tick_pause() {
        let mut app = test_app();
        app.start();
        assert!(app.is_running());

        app.tick();
        assert_eq!(app.session().remaining_seconds, 1499);

        app.pause();
        assert!(!app.is_running());
        assert_eq!(app.status(), Some("Paused"));
    }

    #[test]
    fn test_adjust_duration_persists_and_rebases() {
        let mut app = test_app();
        app.start();
        for _ in 0..60 {
            app.tick();
        }

        app.adjust_duration(SessionKind::Work, -5).unwrap();

        // 20 minutes with 1 minute elapsed
        assert_eq!(app.session().planned_seconds, 1200);
        assert_eq!(app.session().remaining_seconds, 1140);
        assert_eq!(app.configured_minutes(SessionKind::Work), 20);
    }

    #[test]
    fn test_adjust_duration_clamps_at_one_minute() {
        let mut app = test_app();
        app.adjust_duration(SessionKind::Break, -10).unwrap();
        assert_eq!(app.configured_minutes(SessionKind::Break), 1);
    }

    #[test]
    fn test_completion_message() {
        let mut app = test_app();
        app.adjust_duration(SessionKind::Work, -24).unwrap();
        app.start();
        for _ in 0..60 {
            app.tick();
        }

        assert_eq!(app.session().kind, SessionKind::Break);
        assert!(app.status().is_some_and(|s| s.contains("break")));
    }
}
