//! Timer session state.
//!
//! A single [`TimerSession`] lives for the lifetime of its controller and
//! is reset in place on stop and on session transitions.

use serde::{Deserialize, Serialize};

/// Which kind of session the timer is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    /// A focused work interval
    Work,
    /// A rest interval between work sessions
    Break,
}

impl SessionKind {
    /// The kind that follows this one when a session completes.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Work => Self::Break,
            Self::Break => Self::Work,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Break => "Break",
        }
    }
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Observable state of the controller, derived from the session fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControllerState {
    /// No countdown in progress
    Idle,
    /// Counting down
    Running,
    /// Countdown suspended with time remaining
    Paused,
}

impl std::fmt::Display for ControllerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Running => write!(f, "Running"),
            Self::Paused => write!(f, "Paused"),
        }
    }
}

/// The one timer session a controller owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSession {
    /// Current session kind
    pub kind: SessionKind,
    /// Duration this session was (re)configured to, in seconds
    pub planned_seconds: i64,
    /// Seconds left; counts down to 0
    pub remaining_seconds: i64,
    /// Whether the countdown is live
    pub running: bool,
}

impl TimerSession {
    /// Create the initial idle Work session.
    ///
    /// `planned_seconds` is set for display only; the countdown starts at
    /// zero until the controller is started.
    #[must_use]
    pub const fn new(planned_seconds: i64) -> Self {
        Self {
            kind: SessionKind::Work,
            planned_seconds,
            remaining_seconds: 0,
            running: false,
        }
    }

    /// Seconds elapsed within the current session.
    #[must_use]
    pub const fn elapsed_seconds(&self) -> i64 {
        self.planned_seconds - self.remaining_seconds
    }

    /// Classify the session into an observable state.
    #[must_use]
    pub const fn state(&self) -> ControllerState {
        if self.running {
            ControllerState::Running
        } else if self.remaining_seconds == 0 {
            ControllerState::Idle
        } else {
            ControllerState::Paused
        }
    }

    /// Progress through the session as a fraction (0.0 - 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.planned_seconds == 0 {
            return 0.0;
        }
        self.elapsed_seconds() as f64 / self.planned_seconds as f64
    }

    /// Format the remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_mmss(self.remaining_seconds)
    }
}

/// Format a second count as MM:SS.
#[must_use]
pub fn format_mmss(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let minutes = seconds / 60;
    let secs = seconds % 60;
    format!("{minutes:02}:{secs:02}")
}
