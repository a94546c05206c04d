//! Application state and input handling

use crate::config::TuiConfig;
use crate::state::{
    parse_dropped_paths, AppState, Attachment, DocumentType, FormController, FormFocus, Notice,
    SelectOption,
};
use crate::submit::{SimulatedSubmitter, SubmitError, SubmitReceipt, Submitter};
use crate::ui;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

type SubmitResult = Result<SubmitReceipt, SubmitError>;

const SUBMIT_SUCCESS_MESSAGE: &str = "Form submitted successfully!";

/// Main application struct
pub struct App {
    /// Presentation state
    pub state: AppState,
    /// The upload form
    pub form: FormController,
    submitter: Arc<dyn Submitter>,
    submit_tx: mpsc::UnboundedSender<SubmitResult>,
    submit_rx: mpsc::UnboundedReceiver<SubmitResult>,
    /// Terminal size for mouse hit testing (width, height)
    pub terminal_size: Option<(u16, u16)>,
    quit: bool,
}

impl App {
    /// Create an app backed by the simulated submitter
    pub fn new(config: &TuiConfig) -> Self {
        Self::with_submitter(Arc::new(SimulatedSubmitter::new(config.submit_delay())))
    }

    pub fn with_submitter(submitter: Arc<dyn Submitter>) -> Self {
        let (submit_tx, submit_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            form: FormController::new(),
            submitter,
            submit_tx,
            submit_rx,
            terminal_size: None,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    fn has_upload_zone(&self) -> bool {
        self.form.state().doc_type.is_some()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Notice dialogs are modal
        if self.state.has_notices() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.quit = true;
                return;
            }
            KeyCode::Char('s') if ctrl => {
                self.submit();
                return;
            }
            KeyCode::Esc => {
                self.quit = true;
                return;
            }
            KeyCode::Tab => {
                self.state.next_focus(self.has_upload_zone());
                return;
            }
            KeyCode::BackTab => {
                self.state.prev_focus(self.has_upload_zone());
                return;
            }
            _ => {}
        }

        match self.state.focus {
            FormFocus::Company => {
                if let Some(company) = select_key(key, self.form.state().company) {
                    self.form.select_company(company);
                }
            }
            FormFocus::DocumentType => {
                if let Some(doc_type) = select_key::<DocumentType>(key, self.form.state().doc_type)
                {
                    self.form.select_document_type(doc_type);
                    self.state.path_input.clear();
                }
            }
            FormFocus::Upload => self.handle_upload_key(key),
            FormFocus::Submit => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.submit();
                }
            }
        }
    }

    fn handle_upload_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if self.form.state().attachment.is_some() {
            match key.code {
                KeyCode::Delete | KeyCode::Backspace => self.form.remove_file(),
                KeyCode::Char('x') if ctrl => self.form.remove_file(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Enter => {
                let text = self.state.path_input.take();
                self.attach_from_text(&text);
            }
            KeyCode::Backspace => self.state.path_input.pop_char(),
            KeyCode::Char(c) if !ctrl => self.state.path_input.push_char(c),
            _ => {}
        }
    }

    /// Handle pasted text. Terminals paste the path of a file dropped onto
    /// the window, so a paste onto the upload zone is treated as a drop.
    pub fn handle_paste(&mut self, text: &str) {
        if self.state.has_notices() {
            return;
        }
        if !self.has_upload_zone() || self.form.state().attachment.is_some() {
            debug!("paste ignored: no drop zone visible");
            return;
        }

        self.state.focus = FormFocus::Upload;
        self.state.path_input.clear();

        let candidate = match parse_dropped_paths(text).first() {
            Some(path) => match Attachment::from_path(path) {
                Ok(attachment) => Some(attachment),
                Err(e) => {
                    self.form.set_dragging(false);
                    self.state.push_notice(Notice::error(e.to_string()));
                    return;
                }
            },
            None => None,
        };

        if let Err(e) = self.form.drop_files(candidate) {
            self.state.push_notice(Notice::warning(e.to_string()));
        }
    }

    /// Attach the file named by typed text ("browse to upload"). Confirming
    /// an empty path is rejected like an empty drop.
    fn attach_from_text(&mut self, text: &str) {
        let Some(path) = parse_dropped_paths(text).into_iter().next() else {
            if let Err(e) = self.form.drop_files(None::<Attachment>) {
                self.state.push_notice(Notice::warning(e.to_string()));
            }
            return;
        };

        let attachment = match Attachment::from_path(&path) {
            Ok(attachment) => attachment,
            Err(e) => {
                self.state.push_notice(Notice::error(e.to_string()));
                return;
            }
        };

        if let Err(e) = self.form.attach_file(attachment) {
            self.state.push_notice(Notice::warning(e.to_string()));
        }
    }

    /// Handle a mouse event: focus by click, drag feedback over the upload zone
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.state.has_notices() {
            return;
        }
        let Some((width, height)) = self.terminal_size else {
            return;
        };

        let layout = ui::form_layout(self, width, height);
        let pos = Position::new(mouse.column, mouse.row);
        let over_upload = layout.upload.is_some_and(|rect| rect.contains(pos))
            && self.form.state().attachment.is_none();

        match mouse.kind {
            MouseEventKind::Drag(_) => self.form.set_dragging(over_upload),
            MouseEventKind::Moved => {
                if !over_upload {
                    self.form.set_dragging(false);
                }
            }
            MouseEventKind::Up(_) => self.form.set_dragging(false),
            MouseEventKind::Down(MouseButton::Left) => {
                let targets: [(Option<Rect>, FormFocus); 4] = [
                    (Some(layout.company), FormFocus::Company),
                    (Some(layout.doc_type), FormFocus::DocumentType),
                    (layout.upload, FormFocus::Upload),
                    (Some(layout.submit), FormFocus::Submit),
                ];
                let clicked = targets
                    .into_iter()
                    .find(|(rect, _)| rect.is_some_and(|r| r.contains(pos)))
                    .map(|(_, focus)| focus);

                if let Some(focus) = clicked {
                    self.state.focus = focus;
                    if focus == FormFocus::Submit {
                        self.submit();
                    }
                }
            }
            _ => {}
        }
    }

    /// Start a submit in the background. Ignored when the form is invalid or
    /// a submit is already in flight.
    pub fn submit(&mut self) {
        let Some(request) = self.form.begin_submit() else {
            return;
        };

        self.state.status_message = None;
        let submitter = Arc::clone(&self.submitter);
        let tx = self.submit_tx.clone();
        tokio::spawn(async move {
            let result = submitter.submit(request).await;
            // Receiver is only gone during shutdown
            let _ = tx.send(result);
        });
    }

    /// Apply finished submits. Call once per event loop iteration.
    pub fn poll_submissions(&mut self) {
        while let Ok(result) = self.submit_rx.try_recv() {
            self.form.finish_submit(&result);
            match result {
                Ok(receipt) => {
                    info!(id = %receipt.id, "submission acknowledged");
                    self.state.status_message = Some(format!(
                        "Submitted {} at {}",
                        receipt.file_name,
                        receipt.submitted_at.format("%H:%M:%S")
                    ));
                    self.state.push_notice(Notice::info(SUBMIT_SUCCESS_MESSAGE));
                }
                Err(e) => {
                    self.state.push_notice(Notice::error(e.to_string()));
                }
            }
        }
        self.state.fix_focus(self.has_upload_zone());
    }

    /// Advance animations; returns true while something is animating
    pub fn tick(&mut self) -> bool {
        if self.form.state().is_submitting {
            self.state.tick_spinner();
            true
        } else {
            false
        }
    }
}

/// Map a key on a focused select to the option it picks, if any
fn select_key<T: SelectOption>(key: KeyEvent, current: Option<T>) -> Option<T> {
    match key.code {
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
            Some(T::cycle_prev(current))
        }
        KeyCode::Right
        | KeyCode::Down
        | KeyCode::Char('l')
        | KeyCode::Char('j')
        | KeyCode::Char(' ')
        | KeyCode::Enter => Some(T::cycle_next(current)),
        KeyCode::Char(c) => c.to_digit(10).and_then(|d| T::nth(d as usize)),
        _ => None,
    }
}
