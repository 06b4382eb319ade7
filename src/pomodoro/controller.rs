//! Pomodoro timer controller.
//!
//! Owns the single [`TimerSession`] and implements the session state
//! machine: start/pause/stop, tick-driven countdown, Work/Break
//! transitions, and live duration reconfiguration that rebases an
//! in-progress session without losing elapsed time.
//!
//! The controller performs no I/O and never reads a clock. Configured
//! durations are captured at construction and change only through
//! [`PomodoroController::reconfigure`]; the host forwards every settings
//! change, so no tick can observe a half-applied duration.

use chrono::Duration;

use super::presenter::Presenter;
use super::session::{ControllerState, SessionKind, TimerSession};

/// The Pomodoro state machine.
#[derive(Debug)]
pub struct PomodoroController<P: Presenter> {
    work_seconds: i64,
    break_seconds: i64,
    session: TimerSession,
    presenter: P,
}

impl<P: Presenter> PomodoroController<P> {
    /// Create an idle controller with the configured durations.
    ///
    /// The initial session is a Work session with the full work duration
    /// shown and nothing counting down. Durations shorter than one second
    /// are clamped up to one second.
    pub fn new(work: Duration, break_: Duration, presenter: P) -> Self {
        let work_seconds = work.num_seconds().max(1);
        Self {
            work_seconds,
            break_seconds: break_.num_seconds().max(1),
            session: TimerSession::new(work_seconds),
            presenter,
        }
    }

    /// The current session.
    #[must_use]
    pub const fn session(&self) -> &TimerSession {
        &self.session
    }

    /// The current observable state.
    #[must_use]
    pub const fn state(&self) -> ControllerState {
        self.session.state()
    }

    /// The configured duration for a session kind, in seconds.
    #[must_use]
    pub const fn configured_seconds(&self, kind: SessionKind) -> i64 {
        match kind {
            SessionKind::Work => self.work_seconds,
            SessionKind::Break => self.break_seconds,
        }
    }

    /// Borrow the presenter.
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Mutably borrow the presenter.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Start a fresh session, or resume one that has time remaining.
    ///
    /// Idempotent while running.
    pub fn start(&mut self) {
        match self.state() {
            ControllerState::Running => {}
            ControllerState::Idle => {
                let secs = self.configured_seconds(self.session.kind);
                self.session.planned_seconds = secs;
                self.session.remaining_seconds = secs;
                self.session.running = true;
                self.presenter
                    .on_state_changed(ControllerState::Running, self.session.kind);
            }
            ControllerState::Paused => {
                self.session.running = true;
                self.presenter
                    .on_state_changed(ControllerState::Running, self.session.kind);
            }
        }
    }

    /// Suspend the countdown, preserving the remaining time.
    ///
    /// No-op unless running.
    pub fn pause(&mut self) {
        if self.session.running {
            self.session.running = false;
            self.presenter
                .on_state_changed(ControllerState::Paused, self.session.kind);
        }
    }

    /// Abort the cycle and reset to a fresh idle Work session.
    pub fn stop(&mut self) {
        self.session.running = false;
        self.session.kind = SessionKind::Work;
        self.session.remaining_seconds = 0;
        self.session.planned_seconds = self.work_seconds;
        self.presenter
            .on_state_changed(ControllerState::Idle, SessionKind::Work);
    }

    /// Advance the countdown by one second.
    ///
    /// The host calls this once per wall-clock second while the controller
    /// is running; calls in any other state are ignored. Reaching zero
    /// completes the session and primes the next one without starting it.
    pub fn tick(&mut self) {
        if !self.session.running || self.session.remaining_seconds == 0 {
            return;
        }

        self.session.remaining_seconds -= 1;
        self.presenter.on_tick(
            self.session.remaining_seconds,
            self.session.elapsed_seconds(),
            self.session.planned_seconds,
        );

        if self.session.remaining_seconds == 0 {
            self.complete_session();
        }
    }

    /// Apply a changed duration setting.
    ///
    /// The new duration is remembered for future sessions of `kind`. If
    /// `kind` is the active session's kind, the session itself is updated:
    /// idle sessions just refresh the displayed duration, while an
    /// in-progress session is rebased so elapsed time is preserved. When
    /// the elapsed time already meets or exceeds the new duration the
    /// session completes immediately, exactly as a natural tick to zero.
    pub fn reconfigure(&mut self, kind: SessionKind, duration: Duration) {
        let secs = duration.num_seconds().max(1);
        match kind {
            SessionKind::Work => self.work_seconds = secs,
            SessionKind::Break => self.break_seconds = secs,
        }

        if kind != self.session.kind {
            return;
        }

        if self.session.remaining_seconds == 0 {
            self.session.planned_seconds = secs;
            self.presenter.on_reconfigured(kind, secs, 0);
            return;
        }

        let elapsed = self.session.elapsed_seconds();
        if secs > elapsed {
            self.session.planned_seconds = secs;
            self.session.remaining_seconds = secs - elapsed;
            self.presenter
                .on_reconfigured(kind, secs, self.session.remaining_seconds);
        } else {
            self.session.remaining_seconds = 0;
            self.complete_session();
        }
    }

    /// Shared completion path for tick-to-zero and forced completion.
    ///
    /// Flips the session kind and primes the next session with its full
    /// configured duration; an explicit `start()` is required to run it.
    fn complete_session(&mut self) {
        let finished = self.session.kind;
        let next = finished.next();
        let secs = self.configured_seconds(next);

        self.session.running = false;
        self.session.kind = next;
        self.session.planned_seconds = secs;
        self.session.remaining_seconds = secs;

        self.presenter.on_session_completed(finished);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pomodoro::presenter::{HeadlessPresenter, MockPresenter};

    fn controller() -> PomodoroController<HeadlessPresenter> {
        // 25 minute work sessions, 5 minute breaks
        PomodoroController::new(
            Duration::minutes(25),
            Duration::minutes(5),
            HeadlessPresenter,
        )
    }

    #[test]
    fn test_initial_state() {
        let c = controller();
        assert_eq!(c.state(), ControllerState::Idle);
        assert_eq!(c.session().kind, SessionKind::Work);
        assert_eq!(c.session().planned_seconds, 1500);
        assert_eq!(c.session().remaining_seconds, 0);
    }

    #[test]
    fn test_start_reads_configured_duration() {
        let mut c = controller();
        c.start();
        assert_eq!(c.state(), ControllerState::Running);
        assert_eq!(c.session().planned_seconds, 1500);
        assert_eq!(c.session().remaining_seconds, 1500);
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut c = controller();
        c.start();
        for _ in 0..10 {
            c.tick();
        }
        let remaining = c.session().remaining_seconds;
        c.start();
        assert_eq!(c.session().remaining_seconds, remaining);
        assert_eq!(c.state(), ControllerState::Running);
    }

    #[test]
    fn test_tick_decrements_by_exactly_one() {
        let mut c = controller();
        c.start();
        for expected in (0..1500).rev() {
            c.tick();
            assert!(c.session().remaining_seconds >= 0);
            if expected > 0 {
                assert_eq!(c.session().remaining_seconds, expected);
            }
        }
    }

    #[test]
    fn test_tick_ignored_unless_running() {
        let mut c = controller();
        c.tick();
        assert_eq!(c.session().remaining_seconds, 0);

        c.start();
        c.tick();
        c.pause();
        let remaining = c.session().remaining_seconds;
        c.tick();
        assert_eq!(c.session().remaining_seconds, remaining);
    }

    #[test]
    fn test_pause_then_start_resumes_exact_remaining() {
        let mut c = controller();
        c.start();
        for _ in 0..600 {
            c.tick();
        }
        c.pause();
        assert_eq!(c.state(), ControllerState::Paused);
        assert_eq!(c.session().remaining_seconds, 900);

        c.start();
        assert_eq!(c.state(), ControllerState::Running);
        assert_eq!(c.session().remaining_seconds, 900);

        c.tick();
        assert_eq!(c.session().remaining_seconds, 899);
    }

    #[test]
    fn test_pause_when_not_running_is_noop() {
        let mut c = controller();
        c.pause();
        assert_eq!(c.state(), ControllerState::Idle);
    }

    #[test]
    fn test_stop_from_every_state_resets_to_work_idle() {
        // Idle
        let mut c = controller();
        c.stop();
        assert_eq!(c.state(), ControllerState::Idle);
        assert_eq!(c.session().kind, SessionKind::Work);
        assert_eq!(c.session().remaining_seconds, 0);

        // Running, mid-break
        let mut c = controller();
        c.start();
        for _ in 0..1500 {
            c.tick();
        }
        assert_eq!(c.session().kind, SessionKind::Break);
        c.start();
        c.tick();
        c.stop();
        assert_eq!(c.state(), ControllerState::Idle);
        assert_eq!(c.session().kind, SessionKind::Work);
        assert_eq!(c.session().remaining_seconds, 0);
        assert_eq!(c.session().planned_seconds, 1500);

        // Paused
        let mut c = controller();
        c.start();
        c.tick();
        c.pause();
        c.stop();
        assert_eq!(c.state(), ControllerState::Idle);
        assert_eq!(c.session().kind, SessionKind::Work);
    }

    #[test]
    fn test_work_completion_primes_break_without_autostart() {
        let mut c = controller();
        c.start();
        for _ in 0..1500 {
            c.tick();
        }
        assert_eq!(c.session().kind, SessionKind::Break);
        assert_eq!(c.session().planned_seconds, 300);
        assert_eq!(c.session().remaining_seconds, 300);
        assert!(!c.session().running);

        // Ticks do nothing until the primed session is started.
        c.tick();
        assert_eq!(c.session().remaining_seconds, 300);

        c.start();
        c.tick();
        assert_eq!(c.session().remaining_seconds, 299);
    }

    #[test]
    fn test_break_completion_returns_to_work() {
        let mut c = controller();
        c.start();
        for _ in 0..1500 {
            c.tick();
        }
        c.start();
        for _ in 0..300 {
            c.tick();
        }
        assert_eq!(c.session().kind, SessionKind::Work);
        assert_eq!(c.session().planned_seconds, 1500);
        assert!(!c.session().running);
    }

    #[test]
    fn test_reconfigure_extends_running_session() {
        let mut c = controller();
        c.start();
        for _ in 0..600 {
            c.tick();
        }
        assert_eq!(c.session().remaining_seconds, 900);

        // 25 -> 20 minutes with 10 elapsed: still 600s of progress kept.
        c.reconfigure(SessionKind::Work, Duration::minutes(20));
        assert_eq!(c.session().planned_seconds, 1200);
        assert_eq!(c.session().remaining_seconds, 600);
        assert_eq!(c.state(), ControllerState::Running);
    }

    #[test]
    fn test_reconfigure_forces_completion_when_elapsed_exceeds() {
        let mut c = controller();
        c.start();
        for _ in 0..600 {
            c.tick();
        }

        // 8 minutes < 10 elapsed: session completes immediately.
        c.reconfigure(SessionKind::Work, Duration::minutes(8));
        assert_eq!(c.session().kind, SessionKind::Break);
        assert!(!c.session().running);
        assert_eq!(c.session().planned_seconds, 300);
        assert_eq!(c.session().remaining_seconds, 300);
    }

    #[test]
    fn test_reconfigure_exact_elapsed_forces_completion() {
        let mut c = controller();
        c.start();
        for _ in 0..600 {
            c.tick();
        }

        // Exactly the elapsed time counts as exceeded.
        c.reconfigure(SessionKind::Work, Duration::seconds(600));
        assert_eq!(c.session().kind, SessionKind::Break);
    }

    #[test]
    fn test_reconfigure_inactive_kind_leaves_session_untouched() {
        let mut c = controller();
        c.start();
        for _ in 0..100 {
            c.tick();
        }

        c.reconfigure(SessionKind::Break, Duration::minutes(10));
        assert_eq!(c.session().kind, SessionKind::Work);
        assert_eq!(c.session().planned_seconds, 1500);
        assert_eq!(c.session().remaining_seconds, 1400);

        // The stored value takes effect at the next transition.
        for _ in 0..1400 {
            c.tick();
        }
        assert_eq!(c.session().kind, SessionKind::Break);
        assert_eq!(c.session().planned_seconds, 600);
    }

    #[test]
    fn test_reconfigure_while_idle_updates_display_only() {
        let mut c = controller();
        c.reconfigure(SessionKind::Work, Duration::minutes(30));
        assert_eq!(c.session().planned_seconds, 1800);
        assert_eq!(c.session().remaining_seconds, 0);
        assert_eq!(c.state(), ControllerState::Idle);

        c.start();
        assert_eq!(c.session().remaining_seconds, 1800);
    }

    #[test]
    fn test_reconfigure_paused_session_stays_paused() {
        let mut c = controller();
        c.start();
        for _ in 0..600 {
            c.tick();
        }
        c.pause();

        c.reconfigure(SessionKind::Work, Duration::minutes(20));
        assert_eq!(c.state(), ControllerState::Paused);
        assert_eq!(c.session().remaining_seconds, 600);
    }

    #[test]
    fn test_durations_clamped_to_one_second() {
        let mut c = PomodoroController::new(
            Duration::seconds(0),
            Duration::seconds(-5),
            HeadlessPresenter,
        );
        assert_eq!(c.configured_seconds(SessionKind::Work), 1);
        assert_eq!(c.configured_seconds(SessionKind::Break), 1);

        c.reconfigure(SessionKind::Work, Duration::seconds(0));
        assert_eq!(c.configured_seconds(SessionKind::Work), 1);
    }

    #[test]
    fn test_presenter_tick_notifications() {
        let mut mock = MockPresenter::new();
        mock.expect_on_state_changed().return_const(());
        mock.expect_on_tick()
            .withf(|remaining, elapsed, planned| {
                *planned == 1500 && remaining + elapsed == 1500
            })
            .times(3)
            .return_const(());

        let mut c = PomodoroController::new(Duration::minutes(25), Duration::minutes(5), mock);
        c.start();
        c.tick();
        c.tick();
        c.tick();
        c.presenter_mut().checkpoint();
    }

    #[test]
    fn test_presenter_completion_notification() {
        let mut mock = MockPresenter::new();
        mock.expect_on_state_changed().return_const(());
        mock.expect_on_tick().return_const(());
        mock.expect_on_session_completed()
            .withf(|finished| *finished == SessionKind::Work)
            .times(1)
            .return_const(());

        let mut c = PomodoroController::new(Duration::seconds(3), Duration::minutes(5), mock);
        c.start();
        c.tick();
        c.tick();
        c.tick();
        c.presenter_mut().checkpoint();
    }

    #[test]
    fn test_presenter_forced_completion_notification() {
        let mut mock = MockPresenter::new();
        mock.expect_on_state_changed().return_const(());
        mock.expect_on_tick().return_const(());
        mock.expect_on_session_completed()
            .withf(|finished| *finished == SessionKind::Work)
            .times(1)
            .return_const(());
        // Force-completion takes the completion path, not the rebase path.
        mock.expect_on_reconfigured().times(0);

        let mut c = PomodoroController::new(Duration::minutes(25), Duration::minutes(5), mock);
        c.start();
        for _ in 0..600 {
            c.tick();
        }
        c.reconfigure(SessionKind::Work, Duration::minutes(8));
        c.presenter_mut().checkpoint();
    }

    #[test]
    fn test_presenter_reconfigure_notification() {
        let mut mock = MockPresenter::new();
        mock.expect_on_state_changed().return_const(());
        mock.expect_on_tick().return_const(());
        mock.expect_on_reconfigured()
            .withf(|kind, planned, remaining| {
                *kind == SessionKind::Work && *planned == 1200 && *remaining == 600
            })
            .times(1)
            .return_const(());

        let mut c = PomodoroController::new(Duration::minutes(25), Duration::minutes(5), mock);
        c.start();
        for _ in 0..600 {
            c.tick();
        }
        c.reconfigure(SessionKind::Work, Duration::minutes(20));
        c.presenter_mut().checkpoint();
    }
}
