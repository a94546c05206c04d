//! Placeholder backend that waits a fixed delay and always succeeds

use super::traits::{SubmitError, SubmitReceipt, SubmitRequest, Submitter};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, request: SubmitRequest) -> Result<SubmitReceipt, SubmitError> {
        debug!(
            company = %request.company,
            doc_type = %request.doc_type,
            file = %request.attachment.name,
            delay_ms = self.delay.as_millis() as u64,
            "simulating submit"
        );
        tokio::time::sleep(self.delay).await;
        Ok(SubmitReceipt::for_request(&request))
    }
}
