//! Form submission backends

mod simulated;
mod traits;

pub use simulated::SimulatedSubmitter;
pub use traits::{SubmitError, SubmitReceipt, SubmitRequest, Submitter};

#[cfg(test)]
pub use traits::MockSubmitter;
