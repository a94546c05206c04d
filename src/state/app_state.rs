//! Presentation state: focus, path input, notices

use super::forms::FormField;
use std::collections::VecDeque;

/// Which part of the form has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Company,
    DocumentType,
    Upload,
    Submit,
}

impl FormFocus {
    /// Next focus stop. The upload zone only exists once a document type is chosen.
    pub fn next(&self, has_upload: bool) -> Self {
        match self {
            Self::Company => Self::DocumentType,
            Self::DocumentType if has_upload => Self::Upload,
            Self::DocumentType | Self::Upload => Self::Submit,
            Self::Submit => Self::Company,
        }
    }

    pub fn prev(&self, has_upload: bool) -> Self {
        match self {
            Self::Company => Self::Submit,
            Self::DocumentType => Self::Company,
            Self::Upload => Self::DocumentType,
            Self::Submit if has_upload => Self::Upload,
            Self::Submit => Self::DocumentType,
        }
    }
}

/// Severity of a notice dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

/// A message shown to the user in a modal dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// UI state that is not part of the form itself
#[derive(Debug)]
pub struct AppState {
    pub focus: FormFocus,
    pub path_input: FormField,
    /// Queued notices, shown oldest first
    pub notices: VecDeque<Notice>,
    pub status_message: Option<String>,
    /// Advances on each redraw while a submit is in flight
    pub spinner_frame: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            focus: FormFocus::default(),
            path_input: FormField::text("File path"),
            notices: VecDeque::new(),
            status_message: None,
            spinner_frame: 0,
        }
    }
}

impl AppState {
    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    pub fn has_notices(&self) -> bool {
        !self.notices.is_empty()
    }

    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }

    pub fn next_focus(&mut self, has_upload: bool) {
        self.focus = self.focus.next(has_upload);
    }

    pub fn prev_focus(&mut self, has_upload: bool) {
        self.focus = self.focus.prev(has_upload);
    }

    /// Move focus off the upload zone if it just disappeared
    pub fn fix_focus(&mut self, has_upload: bool) {
        if self.focus == FormFocus::Upload && !has_upload {
            self.focus = FormFocus::DocumentType;
        }
    }

    pub fn tick_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }
}
