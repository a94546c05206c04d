//! Attached file value object

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// The only MIME type the upload zone accepts
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Declared type for files whose extension is not recognized
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Errors reading a file chosen by path
#[derive(Debug, Error)]
pub enum AttachmentError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("not a file: {}", .0.display())]
    NotAFile(PathBuf),
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// An in-memory reference to a single chosen file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl Attachment {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Build an attachment from a path on disk.
    ///
    /// The MIME type is declared from the extension, the same way a file
    /// picker reports it; file contents are not sniffed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AttachmentError> {
        let path = path.as_ref();
        let metadata = fs::metadata(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => AttachmentError::NotFound(path.to_path_buf()),
            _ => AttachmentError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        if !metadata.is_file() {
            return Err(AttachmentError::NotAFile(path.to_path_buf()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::new(name, metadata.len(), mime_type_for_path(path)))
    }

    pub fn is_pdf(&self) -> bool {
        self.mime_type == PDF_MIME_TYPE
    }

    /// Size in megabytes with two decimals, e.g. "2.00 MB"
    pub fn display_size(&self) -> String {
        format!("{:.2} MB", self.size_bytes as f64 / 1024.0 / 1024.0)
    }
}

/// Declared MIME type for a path, guessed from its extension
pub fn mime_type_for_path(path: &Path) -> &'static str {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(FALLBACK_MIME_TYPE)
}

/// Turn pasted text into candidate paths.
///
/// Terminals deliver a dropped file as pasted text: one path per line, often
/// quoted, with spaces backslash-escaped or as a percent-encoded `file://` URI.
pub fn parse_dropped_paths(text: &str) -> Vec<PathBuf> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let line = line
                .strip_prefix('\'')
                .and_then(|l| l.strip_suffix('\''))
                .or_else(|| line.strip_prefix('"').and_then(|l| l.strip_suffix('"')))
                .unwrap_or(line);
            if let Some(rest) = line.strip_prefix("file://") {
                return file_uri_to_path(line).unwrap_or_else(|| PathBuf::from(rest));
            }
            PathBuf::from(line.replace("\\ ", " "))
        })
        .collect()
}

fn file_uri_to_path(uri: &str) -> Option<PathBuf> {
    Url::parse(uri).ok()?.to_file_path().ok()
}
