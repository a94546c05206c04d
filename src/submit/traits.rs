//! Trait abstraction for the submit backend to enable mocking in tests

use crate::state::{Attachment, Company, DocumentType};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Snapshot of a valid form taken when a submit starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub company: Company,
    pub doc_type: DocumentType,
    pub attachment: Attachment,
}

/// Acknowledgement for a completed submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub file_name: String,
}

impl SubmitReceipt {
    pub fn for_request(request: &SubmitRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            file_name: request.attachment.name.clone(),
        }
    }
}

#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("submit failed: {0}")]
    Failed(String),
}

/// Sends a completed form somewhere
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Send the form. Runs to completion once started; there is no cancellation.
    async fn submit(&self, request: SubmitRequest) -> Result<SubmitReceipt, SubmitError>;
}
