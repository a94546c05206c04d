//! Single-line text input used for typing a file path

/// Text input with a label, edited one character at a time
#[derive(Debug, Clone, Default)]
pub struct FormField {
    pub label: String,
    value: String,
}

impl FormField {
    pub fn text(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: String::new(),
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Take the trimmed value, leaving the field empty
    pub fn take(&mut self) -> String {
        let value = self.value.trim().to_string();
        self.value.clear();
        value
    }
}
