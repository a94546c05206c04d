//! Field rendering utilities for forms

use crate::state::{FormField, SelectOption};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn border_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw a select as `< value >`, or its placeholder when nothing is chosen
pub fn draw_select<T: SelectOption>(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: Option<T>,
    is_active: bool,
) {
    let (text, text_style) = match value {
        Some(v) => (v.option_label(), Style::default().fg(Color::White)),
        None => (T::PLACEHOLDER, Style::default().fg(Color::DarkGray)),
    };
    let arrow_style = border_style(is_active);

    let mut spans = Vec::with_capacity(4);
    if is_active {
        spans.push(Span::styled("◀ ", arrow_style));
    }
    spans.push(Span::styled(text, text_style));
    if is_active {
        spans.push(Span::styled(" ▶", arrow_style));
    } else {
        spans.push(Span::styled(" ▾", arrow_style));
    }

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw a single-line text input inside its parent block (no border)
pub fn draw_text_input(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let label = Span::styled(
        format!("{}: ", field.label),
        Style::default().fg(Color::DarkGray),
    );
    let value = if field.as_text().is_empty() && !is_active {
        Span::styled("(type or paste a path)", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(field.as_text(), Style::default().fg(Color::White))
    };
    let cursor = if is_active { "▌" } else { "" };

    let line = Line::from(vec![
        label,
        value,
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
