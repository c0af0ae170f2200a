//! Fixed-delay stand-in for a real submission backend

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::payload::{SubmissionAck, SubmissionPayload, TransportError};
use super::traits::SubmissionTransport;

/// Default simulated round-trip latency
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

/// Transport that acknowledges every submission after a fixed delay,
/// standing in for the network round trip to a claims backend.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    latency: Duration,
}

impl SimulatedTransport {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

#[async_trait]
impl SubmissionTransport for SimulatedTransport {
    async fn submit(&self, payload: SubmissionPayload) -> Result<SubmissionAck, TransportError> {
        tracing::debug!(
            form = %payload.form,
            scalars = payload.scalars.len(),
            attachments = payload.attachments.len(),
            "simulated transport carrying payload"
        );
        tracing::trace!(metadata = %payload.metadata_json(), "payload metadata");
        tokio::time::sleep(self.latency).await;
        Ok(SubmissionAck {
            receipt_id: Uuid::new_v4(),
            received_at: Utc::now(),
        })
    }
}
