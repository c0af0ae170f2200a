//! Trait abstraction for the submission endpoint to enable mocking in tests

use async_trait::async_trait;

use super::payload::{SubmissionAck, SubmissionPayload, TransportError};

/// Contract a submission backend must satisfy: one request per accepted
/// validation, answered with an acknowledgment or field-level rejections.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// Deliver one accepted submission
    async fn submit(&self, payload: SubmissionPayload) -> Result<SubmissionAck, TransportError>;
}
