use thiserror::Error;

/// Failures of the external inference collaborator.
///
/// All variants mean the same thing to the resolver: no usable candidates.
/// They are distinguished for logging, not for control flow.
#[derive(Debug, Error)]
pub enum InferError {
    /// The round-trip to the hosted model failed.
    #[error("inference transport failed: {message}")]
    Transport { message: String },

    /// The response could not be decoded against the expected schema.
    #[error("malformed inference payload: {reason}")]
    MalformedPayload { reason: String },

    /// Inference was explicitly turned off for this run.
    #[error("inference is disabled")]
    Disabled,
}

pub type Result<T> = std::result::Result<T, InferError>;
