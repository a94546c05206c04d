//! Form domain layer
//!
//! `FormController` owns the upload form's state and is the only place that
//! decides validity and side effects. The presentation layer only reads
//! snapshots and forwards input.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{FormController, FormError, FormState};
