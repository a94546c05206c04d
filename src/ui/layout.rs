//! Layout components (main area, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into main content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.form.state();
    let is_valid = app.form.is_form_valid();
    let mut spans = vec![];

    let (indicator, color) = if form.is_submitting {
        (" ● ", Color::Yellow)
    } else if is_valid {
        (" ● ", Color::Green)
    } else {
        (" ○ ", Color::Gray)
    };
    spans.push(Span::styled(indicator, Style::default().fg(color)));

    let readiness = if form.is_submitting {
        "submitting"
    } else if is_valid {
        "ready to submit"
    } else {
        "incomplete"
    };
    spans.push(Span::styled(readiness, Style::default().fg(Color::White)));

    if form.is_dragging {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "drop file to attach",
            Style::default().fg(Color::Blue),
        ));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let hint_width = quit_hint.len() as u16;
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(hint_width),
        width: hint_width.min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
