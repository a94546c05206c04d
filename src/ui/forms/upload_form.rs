//! Upload form rendering

use super::field_renderer::{draw_select, draw_text_input};
use crate::app::App;
use crate::state::{Attachment, DocumentType, FormFocus, FormState};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const MAX_FORM_WIDTH: u16 = 80;
const DROP_ZONE_HEIGHT: u16 = 7;
const FILE_CARD_HEIGHT: u16 = 4;
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Screen areas of every form widget.
///
/// Computed from the form state alone so that mouse hit testing agrees with
/// what was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub frame: Rect,
    pub subtitle: Rect,
    pub company: Rect,
    pub doc_type: Rect,
    pub upload: Option<Rect>,
    pub summary: Option<Rect>,
    pub submit: Rect,
    pub help: Rect,
}

impl FormLayout {
    pub fn new(area: Rect, form: &FormState) -> Self {
        let width = area.width.min(MAX_FORM_WIDTH);
        let frame = Rect {
            x: area.x + (area.width - width) / 2,
            width,
            ..area
        };

        let upload_height = form.doc_type.map(|_| {
            if form.attachment.is_some() {
                FILE_CARD_HEIGHT
            } else {
                DROP_ZONE_HEIGHT
            }
        });
        let summary_height = summary_lines(form).map(|lines| lines.len() as u16 + 2);

        let mut constraints = vec![
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
        ];
        constraints.extend(upload_height.map(Constraint::Length));
        constraints.extend(summary_height.map(Constraint::Length));
        constraints.extend([
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ]);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .margin(1)
            .split(frame);

        let mut idx = 3;
        let mut next_optional = |present: bool| {
            present.then(|| {
                let rect = chunks[idx];
                idx += 1;
                rect
            })
        };
        let upload = next_optional(upload_height.is_some());
        let summary = next_optional(summary_height.is_some());

        Self {
            frame,
            subtitle: chunks[0],
            company: chunks[1],
            doc_type: chunks[2],
            upload,
            summary,
            submit: chunks[idx],
            help: chunks[idx + 1],
        }
    }
}

/// Lines of the "Your Selection" box, or `None` when nothing is chosen
fn summary_lines(form: &FormState) -> Option<Vec<Line<'static>>> {
    if !form.has_selection() {
        return None;
    }
    let label = Style::default().fg(Color::Blue);
    let mut lines = Vec::new();
    if let Some(company) = form.company {
        lines.push(Line::from(vec![
            Span::styled("Company: ", label),
            Span::raw(company.label()),
        ]));
    }
    if let Some(doc_type) = form.doc_type {
        lines.push(Line::from(vec![
            Span::styled("Document Type: ", label),
            Span::raw(doc_type.label()),
        ]));
    }
    if let Some(file) = &form.attachment {
        lines.push(Line::from(vec![
            Span::styled("File: ", label),
            Span::raw(file.name.clone()),
        ]));
    }
    Some(lines)
}

/// Draw the whole upload form
pub fn draw_upload_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.form.state();
    let focus = app.state.focus;
    let layout = FormLayout::new(area, form);

    let block = Block::default()
        .title(" ATS Document Management ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, layout.frame);

    let subtitle = Paragraph::new("Select a company and document type to proceed")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(subtitle, layout.subtitle);

    draw_select(
        frame,
        layout.company,
        "Select Company",
        form.company,
        focus == FormFocus::Company,
    );
    draw_select(
        frame,
        layout.doc_type,
        "Select Document Type",
        form.doc_type,
        focus == FormFocus::DocumentType,
    );

    if let (Some(rect), Some(doc_type)) = (layout.upload, form.doc_type) {
        let is_active = focus == FormFocus::Upload;
        match &form.attachment {
            Some(file) => draw_file_card(frame, rect, doc_type, file, is_active),
            None => draw_drop_zone(frame, rect, app, doc_type, is_active),
        }
    }

    if let (Some(rect), Some(lines)) = (layout.summary, summary_lines(form)) {
        let summary = Paragraph::new(lines).block(
            Block::default()
                .title(" Your Selection: ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Blue)),
        );
        frame.render_widget(summary, rect);
    }

    let label = if form.is_submitting {
        let spinner = SPINNER_FRAMES[app.state.spinner_frame % SPINNER_FRAMES.len()];
        format!("{spinner} Submitting...")
    } else {
        "Submit".to_string()
    };
    render_button(
        frame,
        layout.submit,
        &label,
        focus == FormFocus::Submit,
        form.can_submit(),
    );

    let help = Paragraph::new(Line::from(help_spans(focus, form)))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, layout.help);
}

fn upload_title(doc_type: DocumentType) -> String {
    format!(" Upload {} (PDF) ", doc_type.label())
}

fn draw_drop_zone(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    doc_type: DocumentType,
    is_active: bool,
) {
    let dragging = app.form.state().is_dragging;
    let (border_type, border_color) = if dragging {
        (BorderType::Double, Color::Blue)
    } else if is_active {
        (BorderType::Rounded, Color::Cyan)
    } else {
        (BorderType::Rounded, Color::DarkGray)
    };

    let block = Block::default()
        .title(upload_title(doc_type))
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let intro = Paragraph::new(format!(
        "Drag and drop your {} PDF file here, or",
        doc_type.label().to_lowercase()
    ))
    .alignment(Alignment::Center);
    let browse = Paragraph::new(Line::from(Span::styled(
        "browse to upload: type a path and press Enter",
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    let hint = Paragraph::new(doc_type.upload_hint())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    frame.render_widget(intro, rows[0]);
    frame.render_widget(browse, rows[1]);
    frame.render_widget(hint, rows[2]);
    draw_text_input(frame, rows[4], &app.state.path_input, is_active);
}

fn draw_file_card(
    frame: &mut Frame,
    area: Rect,
    doc_type: DocumentType,
    file: &Attachment,
    is_active: bool,
) {
    let border_color = if is_active { Color::Cyan } else { Color::Blue };
    let block = Block::default()
        .title(upload_title(doc_type))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let lines = vec![
        Line::from(vec![
            Span::styled("✔ ", Style::default().fg(Color::Blue)),
            Span::styled(
                file.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!("  {}", file.display_size()),
                Style::default().fg(Color::Gray),
            ),
            Span::styled("   [Del] remove", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn help_spans(focus: FormFocus, form: &FormState) -> Vec<Span<'static>> {
    let key = Style::default().fg(Color::Cyan);
    let mut spans = vec![Span::styled("Tab", key), Span::raw(": next  ")];
    match focus {
        FormFocus::Company | FormFocus::DocumentType => {
            spans.push(Span::styled("←/→", key));
            spans.push(Span::raw(": choose  "));
        }
        FormFocus::Upload if form.attachment.is_some() => {
            spans.push(Span::styled("Del", key));
            spans.push(Span::raw(": remove file  "));
        }
        FormFocus::Upload => {
            spans.push(Span::styled("Enter", key));
            spans.push(Span::raw(": attach path  "));
        }
        FormFocus::Submit => {
            spans.push(Span::styled("Enter", key));
            spans.push(Span::raw(": submit  "));
        }
    }
    spans.push(Span::styled("Ctrl+S", key));
    spans.push(Span::raw(": submit  "));
    spans.push(Span::styled("Esc", key));
    spans.push(Span::raw(": quit"));
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Company, PDF_MIME_TYPE};

    fn area() -> Rect {
        Rect::new(0, 0, 100, 40)
    }

    #[test]
    fn test_empty_form_has_no_upload_or_summary() {
        let layout = FormLayout::new(area(), &FormState::default());
        assert!(layout.upload.is_none());
        assert!(layout.summary.is_none());
        assert_eq!(layout.submit.height, BUTTON_HEIGHT);
        assert!(layout.submit.y > layout.doc_type.y);
    }

    #[test]
    fn test_frame_is_centered_and_capped() {
        let layout = FormLayout::new(area(), &FormState::default());
        assert_eq!(layout.frame.width, MAX_FORM_WIDTH);
        assert_eq!(layout.frame.x, 10);
    }

    #[test]
    fn test_doc_type_shows_drop_zone() {
        let form = FormState {
            doc_type: Some(DocumentType::Resume),
            ..Default::default()
        };
        let layout = FormLayout::new(area(), &form);
        let upload = layout.upload.unwrap();
        assert_eq!(upload.height, DROP_ZONE_HEIGHT);
        assert!(upload.y > layout.doc_type.y);
        assert!(layout.summary.unwrap().y > upload.y);
    }

    #[test]
    fn test_attachment_shows_file_card() {
        let form = FormState {
            company: Some(Company::Apple),
            doc_type: Some(DocumentType::Resume),
            attachment: Some(Attachment::new("cv.pdf", 2_097_152, PDF_MIME_TYPE)),
            ..Default::default()
        };
        let layout = FormLayout::new(area(), &form);
        assert_eq!(layout.upload.unwrap().height, FILE_CARD_HEIGHT);
        // three summary lines plus borders
        assert_eq!(layout.summary.unwrap().height, 5);
    }

    #[test]
    fn test_summary_lines_follow_selection() {
        assert!(summary_lines(&FormState::default()).is_none());
        let form = FormState {
            company: Some(Company::Ibm),
            ..Default::default()
        };
        assert_eq!(summary_lines(&form).unwrap().len(), 1);
    }

    #[test]
    fn test_upload_title() {
        assert_eq!(
            upload_title(DocumentType::JobDescription),
            " Upload Job Description (PDF) "
        );
    }
}
