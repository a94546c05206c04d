//! Application state module

mod app_state;
mod attachment;
mod catalog;
mod forms;

pub use app_state::*;
pub use attachment::*;
pub use catalog::*;
pub use forms::*;
