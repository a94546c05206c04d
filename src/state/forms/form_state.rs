//! Form state and the controller that owns every transition

use crate::state::{Attachment, Company, DocumentType};
use crate::submit::{SubmitError, SubmitReceipt, SubmitRequest, Submitter};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised by form transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The supplied file is not declared as `application/pdf`
    #[error("Please upload a PDF file")]
    InvalidFileType { name: String, mime_type: String },
}

/// Every mutable field of the upload form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub company: Option<Company>,
    pub doc_type: Option<DocumentType>,
    pub attachment: Option<Attachment>,
    pub is_dragging: bool,
    pub is_submitting: bool,
}

impl FormState {
    /// Company, document type and attachment are all present
    pub fn is_form_valid(&self) -> bool {
        self.company.is_some() && self.doc_type.is_some() && self.attachment.is_some()
    }

    /// Submit is enabled for the current state
    pub fn can_submit(&self) -> bool {
        self.is_form_valid() && !self.is_submitting
    }

    /// Anything has been chosen yet
    pub fn has_selection(&self) -> bool {
        self.company.is_some() || self.doc_type.is_some() || self.attachment.is_some()
    }
}

/// Owns the [`FormState`] and enforces the transition rules.
///
/// All transitions are synchronous and run to completion. Submitting is split
/// into [`begin_submit`](Self::begin_submit) and
/// [`finish_submit`](Self::finish_submit) so the event loop can keep handling
/// input while the request is in flight.
#[derive(Debug, Default)]
pub struct FormController {
    state: FormState,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_form_valid(&self) -> bool {
        self.state.is_form_valid()
    }

    pub fn select_company(&mut self, company: Company) {
        info!(company = %company, "company selected");
        self.state.company = Some(company);
    }

    /// Select a document type. Any attached file is cleared, even when the
    /// type does not change.
    pub fn select_document_type(&mut self, doc_type: DocumentType) {
        info!(doc_type = %doc_type, "document type selected");
        self.state.doc_type = Some(doc_type);
        if let Some(previous) = self.state.attachment.take() {
            debug!(file = %previous.name, "attachment cleared by document type change");
        }
    }

    pub fn attach_file(&mut self, candidate: Attachment) -> Result<(), FormError> {
        if !candidate.is_pdf() {
            warn!(
                file = %candidate.name,
                mime_type = %candidate.mime_type,
                "rejected non-PDF file"
            );
            return Err(FormError::InvalidFileType {
                name: candidate.name,
                mime_type: candidate.mime_type,
            });
        }
        info!(file = %candidate.name, size_bytes = candidate.size_bytes, "file attached");
        self.state.attachment = Some(candidate);
        Ok(())
    }

    /// Finish a drag gesture: clear the dragging flag and attach the first
    /// dropped file. Dropping nothing is rejected like a non-PDF file.
    pub fn drop_files(
        &mut self,
        files: impl IntoIterator<Item = Attachment>,
    ) -> Result<(), FormError> {
        self.set_dragging(false);
        match files.into_iter().next() {
            Some(first) => self.attach_file(first),
            None => {
                warn!("no file chosen");
                Err(FormError::InvalidFileType {
                    name: String::new(),
                    mime_type: String::new(),
                })
            }
        }
    }

    pub fn remove_file(&mut self) {
        if let Some(previous) = self.state.attachment.take() {
            info!(file = %previous.name, "file removed");
        }
    }

    pub fn set_dragging(&mut self, flag: bool) {
        if self.state.is_dragging != flag {
            debug!(dragging = flag, "drag state changed");
        }
        self.state.is_dragging = flag;
    }

    /// Start a submit. Returns `None` (and changes nothing) unless the form is
    /// valid and no submit is already in flight.
    pub fn begin_submit(&mut self) -> Option<SubmitRequest> {
        if !self.state.can_submit() {
            debug!(
                valid = self.state.is_form_valid(),
                submitting = self.state.is_submitting,
                "submit ignored"
            );
            return None;
        }

        let (Some(company), Some(doc_type), Some(attachment)) = (
            self.state.company,
            self.state.doc_type,
            self.state.attachment.clone(),
        ) else {
            return None;
        };

        self.state.is_submitting = true;
        info!(company = %company, doc_type = %doc_type, file = %attachment.name, "submit started");
        Some(SubmitRequest {
            company,
            doc_type,
            attachment,
        })
    }

    /// Complete the in-flight submit. The submitting flag is always reset; a
    /// successful submit clears the attachment but keeps company and document
    /// type selected.
    pub fn finish_submit(&mut self, result: &Result<SubmitReceipt, SubmitError>) {
        self.state.is_submitting = false;
        match result {
            Ok(receipt) => {
                info!(id = %receipt.id, file = %receipt.file_name, "submit completed");
                self.state.attachment = None;
            }
            Err(e) => {
                warn!(error = %e, "submit failed");
            }
        }
    }

    /// Run a whole submit against `submitter`. Returns `None` when the submit
    /// was not allowed to start.
    ///
    /// For callers that can await in place. The TUI event loop must keep
    /// drawing while the request runs, so `App` calls `begin_submit` and
    /// `finish_submit` around a spawned task instead.
    #[allow(dead_code)]
    pub async fn submit(
        &mut self,
        submitter: &dyn Submitter,
    ) -> Option<Result<SubmitReceipt, SubmitError>> {
        let request = self.begin_submit()?;
        let result = submitter.submit(request).await;
        self.finish_submit(&result);
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PDF_MIME_TYPE;
    use crate::submit::MockSubmitter;

    fn cv() -> Attachment {
        Attachment::new("cv.pdf", 2_097_152, PDF_MIME_TYPE)
    }

    fn notes() -> Attachment {
        Attachment::new("notes.txt", 120, "text/plain")
    }

    fn valid_controller() -> FormController {
        let mut controller = FormController::new();
        controller.select_company(Company::Apple);
        controller.select_document_type(DocumentType::Resume);
        controller.attach_file(cv()).unwrap();
        controller
    }

    fn receipt() -> SubmitReceipt {
        SubmitReceipt {
            id: uuid::Uuid::nil(),
            submitted_at: chrono::Utc::now(),
            file_name: "cv.pdf".to_string(),
        }
    }

    mod validity {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_form_is_empty_and_invalid() {
            let controller = FormController::new();
            assert_eq!(controller.state().clone(), FormState::default());
            assert!(!controller.is_form_valid());
            assert!(!controller.state().has_selection());
        }

        #[test]
        fn test_valid_only_when_all_three_present() {
            let mut controller = FormController::new();
            controller.select_company(Company::Google);
            assert!(!controller.is_form_valid());
            controller.select_document_type(DocumentType::JobDescription);
            assert!(!controller.is_form_valid());
            controller.attach_file(cv()).unwrap();
            assert!(controller.is_form_valid());
            controller.remove_file();
            assert!(!controller.is_form_valid());
        }

        #[test]
        fn test_selection_sequences_never_validate_without_file() {
            let mut controller = FormController::new();
            for (company, doc_type) in Company::ALL.iter().zip(DocumentType::ALL.iter().cycle()) {
                controller.select_company(*company);
                controller.select_document_type(*doc_type);
                assert!(!controller.is_form_valid());
            }
        }

        #[test]
        fn test_changing_company_keeps_attachment() {
            let mut controller = valid_controller();
            controller.select_company(Company::Tesla);
            assert_eq!(controller.state().attachment, Some(cv()));
            assert!(controller.is_form_valid());
        }
    }

    mod attach {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_scenario_apple_resume_cv() {
            let controller = valid_controller();
            let state = controller.state();
            assert!(state.is_form_valid());
            assert_eq!(state.company, Some(Company::Apple));
            assert_eq!(state.doc_type, Some(DocumentType::Resume));
            assert_eq!(
                state.attachment.as_ref().map(|a| a.display_size()),
                Some("2.00 MB".to_string())
            );
        }

        #[test]
        fn test_non_pdf_rejected_and_previous_kept() {
            let mut controller = valid_controller();
            let err = controller.attach_file(notes()).unwrap_err();
            assert_eq!(
                err,
                FormError::InvalidFileType {
                    name: "notes.txt".to_string(),
                    mime_type: "text/plain".to_string(),
                }
            );
            assert_eq!(controller.state().attachment, Some(cv()));
        }

        #[test]
        fn test_non_pdf_rejected_on_empty_form() {
            let mut controller = FormController::new();
            assert!(controller.attach_file(notes()).is_err());
            assert_eq!(controller.state().clone(), FormState::default());
        }

        #[test]
        fn test_invalid_file_type_message() {
            let mut controller = FormController::new();
            let err = controller.attach_file(notes()).unwrap_err();
            assert_eq!(err.to_string(), "Please upload a PDF file");
        }

        #[test]
        fn test_pdf_replaces_previous_pdf() {
            let mut controller = valid_controller();
            let other = Attachment::new("cv-v2.pdf", 10, PDF_MIME_TYPE);
            controller.attach_file(other.clone()).unwrap();
            assert_eq!(controller.state().attachment, Some(other));
        }

        #[test]
        fn test_document_type_change_clears_attachment() {
            for doc_type in DocumentType::ALL {
                let mut controller = valid_controller();
                controller.select_document_type(doc_type);
                assert_eq!(controller.state().attachment, None);
                assert_eq!(controller.state().doc_type, Some(doc_type));
            }
        }

        #[test]
        fn test_remove_file_is_idempotent() {
            let mut controller = valid_controller();
            controller.remove_file();
            let once = controller.state().clone();
            controller.remove_file();
            assert_eq!(controller.state().clone(), once);
            assert_eq!(once.attachment, None);
            assert_eq!(once.company, Some(Company::Apple));
        }
    }

    mod drag_and_drop {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_set_dragging_only_touches_flag() {
            let mut controller = valid_controller();
            let before = controller.state().clone();
            controller.set_dragging(true);
            assert!(controller.state().is_dragging);
            controller.set_dragging(false);
            assert_eq!(controller.state().clone(), before);
        }

        #[test]
        fn test_drop_attaches_first_file_and_clears_dragging() {
            let mut controller = FormController::new();
            controller.set_dragging(true);
            let second = Attachment::new("other.pdf", 1, PDF_MIME_TYPE);
            controller.drop_files(vec![cv(), second]).unwrap();
            assert!(!controller.state().is_dragging);
            assert_eq!(controller.state().attachment, Some(cv()));
        }

        #[test]
        fn test_drop_non_pdf_rejected() {
            let mut controller = valid_controller();
            controller.set_dragging(true);
            let err = controller.drop_files(vec![notes()]).unwrap_err();
            assert!(matches!(err, FormError::InvalidFileType { .. }));
            assert!(!controller.state().is_dragging);
            assert_eq!(controller.state().attachment, Some(cv()));
        }

        #[test]
        fn test_empty_drop_rejected() {
            let mut controller = FormController::new();
            controller.set_dragging(true);
            assert!(controller.drop_files(Vec::new()).is_err());
            assert!(!controller.state().is_dragging);
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_begin_submit_on_invalid_form_is_noop() {
            let mut controller = FormController::new();
            controller.select_company(Company::Apple);
            let before = controller.state().clone();
            assert!(controller.begin_submit().is_none());
            assert_eq!(controller.state().clone(), before);
        }

        #[test]
        fn test_begin_submit_sets_flag_and_snapshots_form() {
            let mut controller = valid_controller();
            let request = controller.begin_submit().unwrap();
            assert!(controller.state().is_submitting);
            assert_eq!(
                request,
                SubmitRequest {
                    company: Company::Apple,
                    doc_type: DocumentType::Resume,
                    attachment: cv(),
                }
            );
        }

        #[test]
        fn test_second_submit_while_in_flight_has_no_effect() {
            let mut controller = valid_controller();
            controller.begin_submit().unwrap();
            let in_flight = controller.state().clone();
            assert!(controller.begin_submit().is_none());
            assert_eq!(controller.state().clone(), in_flight);
        }

        #[test]
        fn test_other_transitions_allowed_while_in_flight() {
            let mut controller = valid_controller();
            controller.begin_submit().unwrap();
            controller.select_company(Company::Meta);
            controller.remove_file();
            assert!(controller.state().is_submitting);
            assert_eq!(controller.state().company, Some(Company::Meta));
            assert_eq!(controller.state().attachment, None);
        }

        #[test]
        fn test_finish_success_clears_only_attachment() {
            let mut controller = valid_controller();
            controller.begin_submit().unwrap();
            controller.finish_submit(&Ok(receipt()));
            let state = controller.state();
            assert!(!state.is_submitting);
            assert_eq!(state.attachment, None);
            assert_eq!(state.company, Some(Company::Apple));
            assert_eq!(state.doc_type, Some(DocumentType::Resume));
        }

        #[test]
        fn test_finish_failure_resets_flag_and_keeps_attachment() {
            let mut controller = valid_controller();
            controller.begin_submit().unwrap();
            controller.finish_submit(&Err(SubmitError::Failed("offline".to_string())));
            assert!(!controller.state().is_submitting);
            assert_eq!(controller.state().attachment, Some(cv()));
            assert!(controller.begin_submit().is_some());
        }

        #[tokio::test]
        async fn test_submit_runs_full_lifecycle() {
            let mut submitter = MockSubmitter::new();
            submitter
                .expect_submit()
                .times(1)
                .withf(|req| req.attachment.name == "cv.pdf")
                .returning(|_| Ok(receipt()));

            let mut controller = valid_controller();
            assert!(!controller.state().is_submitting);
            let result = controller.submit(&submitter).await;

            assert!(matches!(result, Some(Ok(_))));
            assert!(!controller.state().is_submitting);
            assert_eq!(controller.state().attachment, None);
            assert_eq!(controller.state().company, Some(Company::Apple));
            assert_eq!(controller.state().doc_type, Some(DocumentType::Resume));
        }

        #[tokio::test]
        async fn test_submit_invalid_form_never_calls_backend() {
            let mut submitter = MockSubmitter::new();
            submitter.expect_submit().times(0);

            let mut controller = FormController::new();
            assert!(controller.submit(&submitter).await.is_none());
        }

        #[tokio::test]
        async fn test_form_reusable_after_submit() {
            let mut submitter = MockSubmitter::new();
            submitter.expect_submit().times(2).returning(|_| Ok(receipt()));

            let mut controller = valid_controller();
            controller.submit(&submitter).await.unwrap().unwrap();
            controller.attach_file(cv()).unwrap();
            controller.submit(&submitter).await.unwrap().unwrap();
            assert_eq!(controller.state().attachment, None);
        }
    }
}
