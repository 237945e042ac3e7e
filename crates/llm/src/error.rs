//! Failure reporting for the completion relay.

use thiserror::Error;

/// A failed completion attempt.
///
/// Every variant is recoverable at the caller: the handler logs it and
/// surfaces one generic notice to the end user.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// The endpoint answered with a non-success status.
    #[error("completion endpoint returned {status}: {body}")]
    Status {
        /// The HTTP status code
        status: u16,
        /// The response body text
        body: String,
    },

    /// The request never completed.
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not the expected response shape.
    #[error("malformed completion response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The body parsed but carried no choices.
    #[error("completion response carried no choices")]
    Empty,
}
