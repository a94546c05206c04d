//! Form rendering module
//!
//! - `field_renderer`: select and text input rendering
//! - `upload_form`: the company / document type / file upload form

mod field_renderer;
mod upload_form;

pub use upload_form::{draw_upload_form, FormLayout};
