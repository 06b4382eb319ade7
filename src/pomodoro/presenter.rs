//! Display notifications emitted by the timer engine.
//!
//! The controller pushes updates through this trait instead of drawing
//! anything itself. All methods default to no-ops so a host only
//! implements the notifications it cares about.

use super::session::{ControllerState, SessionKind};

/// Receiver for timer display updates.
#[cfg_attr(test, mockall::automock)]
pub trait Presenter {
    /// One second of countdown elapsed.
    fn on_tick(&mut self, remaining_seconds: i64, elapsed_seconds: i64, planned_seconds: i64) {
        let _ = (remaining_seconds, elapsed_seconds, planned_seconds);
    }

    /// The controller entered a new state via start/pause/stop.
    fn on_state_changed(&mut self, state: ControllerState, kind: SessionKind) {
        let _ = (state, kind);
    }

    /// A session ran to completion; the next session is primed but not started.
    fn on_session_completed(&mut self, finished: SessionKind) {
        let _ = finished;
    }

    /// The active session's duration was reconfigured.
    fn on_reconfigured(&mut self, kind: SessionKind, planned_seconds: i64, remaining_seconds: i64) {
        let _ = (kind, planned_seconds, remaining_seconds);
    }
}

/// A presenter that ignores every notification, for headless hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessPresenter;

impl Presenter for HeadlessPresenter {}
