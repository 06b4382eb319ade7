//! Pomodoro timer engine.
//!
//! The timer is a pure state machine: the host owns the tick cadence (one
//! [`PomodoroController::tick`] per wall-clock second while running) and
//! forwards duration-setting changes via
//! [`PomodoroController::reconfigure`]. Display updates flow out through
//! the [`Presenter`] trait, so the engine runs headless in tests.

pub mod controller;
pub mod presenter;
pub mod session;

pub use controller::PomodoroController;
pub use presenter::{HeadlessPresenter, Presenter};
pub use session::{format_mmss, ControllerState, SessionKind, TimerSession};
