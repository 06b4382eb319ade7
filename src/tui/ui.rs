//! UI rendering for the Pomodoro TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::pomodoro::{ControllerState, SessionKind};
use crate::tui::app::App;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Layout: header, countdown, gauge, durations, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Countdown
            Constraint::Length(3), // Gauge
            Constraint::Length(2), // Durations
            Constraint::Min(0),    // Spacer
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_countdown(frame, app, chunks[1]);
    render_gauge(frame, app, chunks[2]);
    render_durations(frame, app, chunks[3]);
    render_status_bar(frame, app, chunks[5]);
}

/// Color for a session kind: red work, green break.
const fn kind_color(kind: SessionKind) -> Color {
    match kind {
        SessionKind::Work => Color::Red,
        SessionKind::Break => Color::Green,
    }
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let session = app.session();
    let title = format!(" 🍅 Pomodoro - {} Session ({}) ", session.kind, app.state());

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(kind_color(session.kind))
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(kind_color(session.kind))),
        );

    frame.render_widget(header, area);
}

/// Render the MM:SS countdown.
fn render_countdown(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let session = app.session();

    let shown = if app.state() == ControllerState::Idle {
        // Idle shows the full configured duration, ready to start
        crate::pomodoro::format_mmss(session.planned_seconds)
    } else {
        session.format_remaining()
    };

    let countdown = Paragraph::new(shown)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(kind_color(session.kind))
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(countdown, area);
}

/// Render the progress gauge.
fn render_gauge(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let session = app.session();

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(Style::default().fg(kind_color(session.kind)))
        .ratio(session.progress().clamp(0.0, 1.0));

    frame.render_widget(gauge, area);
}

/// Render the configured durations.
fn render_durations(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let text = format!(
        " Work {}m ([ / ])   Break {}m ({{ / }})",
        app.configured_minutes(SessionKind::Work),
        app.configured_minutes(SessionKind::Break),
    );

    let durations = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(durations, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app
        .status()
        .unwrap_or("s:start | p:pause | x:stop | [ ] { }:durations | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
