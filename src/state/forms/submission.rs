//! Submission lifecycle state machine
//!
//! Orchestrates validate → transport → settle for one form instance. The
//! transport round trip runs as a spawned task with a oneshot completion
//! channel; all state mutation stays on the event thread via [`poll`].
//!
//! [`poll`]: SubmissionController::poll

use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::transport::{SubmissionAck, SubmissionPayload, SubmissionTransport, TransportError};

use super::definitions::FormDefinition;
use super::form_state::FormInstance;

/// Lifecycle status of one form's submission.
///
/// `Succeeded` and `Failed` are transient: the controller folds them back to
/// `Idle` within the same settle step, leaving the status message as the
/// observable trace. No user action is needed to leave them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Tone of the inline status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Error,
}

/// Short message displayed near the submit control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub tone: StatusTone,
}

impl StatusLine {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: StatusTone::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: StatusTone::Error,
        }
    }
}

/// What a submit event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDisposition {
    /// Validation accepted; a transport round trip is in flight
    Started,
    /// Validation rejected; the reason is displayed, nothing was started
    Rejected,
    /// A round trip was already in flight; the event was a no-op
    AlreadyInFlight,
}

/// How an in-flight submission settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded(SubmissionAck),
    Failed(String),
}

struct InFlight {
    rx: oneshot::Receiver<Result<SubmissionAck, TransportError>>,
    task: JoinHandle<()>,
    success_message: &'static str,
}

/// Drives the submission lifecycle for one form instance.
///
/// Core invariant: at most one round trip in flight per form at any time. A
/// submit event while `Submitting` is a guaranteed no-op.
#[derive(Default)]
pub struct SubmissionController {
    status: SubmissionStatus,
    message: Option<StatusLine>,
    in_flight: Option<InFlight>,
}

impl SubmissionController {
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn message(&self) -> Option<&StatusLine> {
        self.message.as_ref()
    }

    pub(crate) fn set_message(&mut self, message: StatusLine) {
        self.message = Some(message);
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Validate the form and, if accepted, start exactly one transport
    /// round trip.
    pub fn submit(
        &mut self,
        definition: &FormDefinition,
        form: &FormInstance,
        transport: Arc<dyn SubmissionTransport>,
    ) -> SubmitDisposition {
        if self.is_submitting() {
            return SubmitDisposition::AlreadyInFlight;
        }

        let verdict = (definition.validator)(form);
        if !verdict.accepted {
            let reason = verdict
                .reason
                .unwrap_or_else(|| "Submission rejected.".to_string());
            tracing::debug!(form = definition.key, %reason, "submission rejected by validation");
            self.message = Some(StatusLine::error(reason));
            return SubmitDisposition::Rejected;
        }

        let payload = SubmissionPayload::from_form(definition.key, form);
        let (tx, rx) = oneshot::channel();
        let task = tokio::spawn(async move {
            let result = transport.submit(payload).await;
            // The receiver is gone if the session unmounted; the completion
            // then fires harmlessly into a dropped channel.
            let _ = tx.send(result);
        });

        self.status = SubmissionStatus::Submitting;
        self.message = None;
        self.in_flight = Some(InFlight {
            rx,
            task,
            success_message: definition.success_message,
        });
        tracing::info!(form = definition.key, "submission started");
        SubmitDisposition::Started
    }

    /// Settle the in-flight submission if its round trip completed.
    ///
    /// On success the form is reset before the status folds back to `Idle`,
    /// so the reset is always sequenced strictly after the completion. On
    /// transport failure the form is left untouched for retry.
    pub fn poll(&mut self, form: &mut FormInstance) -> Option<SubmissionOutcome> {
        let in_flight = self.in_flight.as_mut()?;
        let settled = match in_flight.rx.try_recv() {
            Ok(result) => result,
            Err(oneshot::error::TryRecvError::Empty) => return None,
            Err(oneshot::error::TryRecvError::Closed) => Err(TransportError::Unavailable(
                "submission task dropped".to_string(),
            )),
        };

        let success_message = in_flight.success_message;
        self.in_flight = None;

        match settled {
            Ok(ack) => {
                self.status = SubmissionStatus::Succeeded;
                tracing::info!(
                    receipt = %ack.receipt_id,
                    received_at = %ack.received_at,
                    "submission acknowledged"
                );
                form.reset();
                self.message = Some(StatusLine::success(success_message));
                self.fold_to_idle();
                Some(SubmissionOutcome::Succeeded(ack))
            }
            Err(err) => {
                self.status = SubmissionStatus::Failed;
                let reason = err.to_string();
                tracing::warn!(%reason, "submission failed");
                // Input is preserved for resubmission; only the message changes.
                self.message = Some(StatusLine::error(reason.clone()));
                self.fold_to_idle();
                Some(SubmissionOutcome::Failed(reason))
            }
        }
    }

    /// Abort any in-flight round trip and fold back to `Idle` without
    /// touching the form.
    pub fn cancel(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.task.abort();
            self.status = SubmissionStatus::Idle;
            tracing::debug!("in-flight submission cancelled");
        }
    }

    // The terminal states are observational only, never resting.
    fn fold_to_idle(&mut self) {
        debug_assert!(matches!(
            self.status,
            SubmissionStatus::Succeeded | SubmissionStatus::Failed
        ));
        self.status = SubmissionStatus::Idle;
    }
}
