//! Submission transport module
//!
//! The controller hands every accepted submission to a [`SubmissionTransport`].
//! The only implementation shipped here is a fixed-delay simulation; a real
//! backend client satisfies the same trait.

mod payload;
mod simulated;
mod traits;

pub use payload::{
    BinaryPart, FieldRejection, ScalarField, SubmissionAck, SubmissionPayload, TransportError,
};
pub use simulated::{SimulatedTransport, DEFAULT_LATENCY};
pub use traits::SubmissionTransport;

#[cfg(test)]
pub use traits::MockSubmissionTransport;
