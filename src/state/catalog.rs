//! Fixed option sets for the form selects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a label does not name a known option
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {label:?}")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub label: String,
}

/// Company the document is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Company {
    #[serde(rename = "Apple Inc.")]
    Apple,
    Google,
    Microsoft,
    Amazon,
    Meta,
    Netflix,
    Tesla,
    #[serde(rename = "IBM")]
    Ibm,
}

impl Company {
    /// All companies in display order
    pub const ALL: [Company; 8] = [
        Self::Apple,
        Self::Google,
        Self::Microsoft,
        Self::Amazon,
        Self::Meta,
        Self::Netflix,
        Self::Tesla,
        Self::Ibm,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Apple => "Apple Inc.",
            Self::Google => "Google",
            Self::Microsoft => "Microsoft",
            Self::Amazon => "Amazon",
            Self::Meta => "Meta",
            Self::Netflix => "Netflix",
            Self::Tesla => "Tesla",
            Self::Ibm => "IBM",
        }
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Company {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| UnknownOption {
                kind: "company",
                label: s.to_string(),
            })
    }
}

/// Kind of document being uploaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "Job Description")]
    JobDescription,
    Resume,
}

impl DocumentType {
    /// All document types in display order
    pub const ALL: [DocumentType; 2] = [Self::JobDescription, Self::Resume];

    pub fn label(&self) -> &'static str {
        match self {
            Self::JobDescription => "Job Description",
            Self::Resume => "Resume",
        }
    }

    /// Hint shown under the upload zone
    pub fn upload_hint(&self) -> &'static str {
        match self {
            Self::Resume => "Upload your resume in PDF format",
            Self::JobDescription => "Upload the job description document in PDF format",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DocumentType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or_else(|| UnknownOption {
                kind: "document type",
                label: s.to_string(),
            })
    }
}

/// A closed set of options that a select field can cycle through
pub trait SelectOption: Copy + PartialEq + 'static {
    const PLACEHOLDER: &'static str;

    fn options() -> &'static [Self];
    fn option_label(&self) -> &'static str;

    /// Option after `current`, wrapping; an empty select starts at the first option
    fn cycle_next(current: Option<Self>) -> Self {
        let opts = Self::options();
        match current.and_then(|c| opts.iter().position(|o| *o == c)) {
            Some(idx) => opts[(idx + 1) % opts.len()],
            None => opts[0],
        }
    }

    /// Option before `current`, wrapping; an empty select starts at the last option
    fn cycle_prev(current: Option<Self>) -> Self {
        let opts = Self::options();
        match current.and_then(|c| opts.iter().position(|o| *o == c)) {
            Some(0) | None => opts[opts.len() - 1],
            Some(idx) => opts[idx - 1],
        }
    }

    /// 1-based lookup used by digit shortcuts
    fn nth(position: usize) -> Option<Self> {
        position
            .checked_sub(1)
            .and_then(|idx| Self::options().get(idx).copied())
    }
}

impl SelectOption for Company {
    const PLACEHOLDER: &'static str = "Choose a company";

    fn options() -> &'static [Self] {
        &Self::ALL
    }

    fn option_label(&self) -> &'static str {
        self.label()
    }
}

impl SelectOption for DocumentType {
    const PLACEHOLDER: &'static str = "Choose document type";

    fn options() -> &'static [Self] {
        &Self::ALL
    }

    fn option_label(&self) -> &'static str {
        self.label()
    }
}
