//! Error taxonomy for LRS operations.

use thiserror::Error;
use xapi_protocol::{HttpResponse, TransportFailure};

/// Result alias used by every LRS operation.
pub type LrsResult<T> = Result<T, LrsError>;

/// Message used when a failing response carried no body.
const NO_BODY_FALLBACK: &str = "no response body";

/// Why an LRS operation failed.
///
/// No failure is fatal to the client: the next call starts from a fresh
/// request. Nothing is retried automatically; retry policy belongs to
/// the caller.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LrsError {
    /// No response was obtained (connection, DNS, timeout).
    #[error("transport failure: {0}")]
    Transport(#[from] TransportFailure),

    /// A response was obtained but its status did not match the
    /// operation's success contract. The message is a best-effort text
    /// decode of the response body.
    #[error("unexpected status {status}: {message}")]
    Protocol {
        /// The status the LRS returned.
        status: u16,
        /// Error detail extracted from the response body.
        message: String,
    },

    /// The success status arrived but the body was not what the
    /// operation required.
    #[error("invalid response body: {0}")]
    InvalidResponse(String),

    /// Request content could not be encoded.
    #[error("request serialization failed: {0}")]
    Serialization(String),
}

impl LrsError {
    /// Classify a response that failed an operation's status check.
    pub(crate) fn from_response(response: HttpResponse) -> Self {
        if response.is_no_response() {
            if let Some(failure) = response.failure {
                return LrsError::Transport(failure);
            }
        }
        let message = if response.content.is_empty() {
            NO_BODY_FALLBACK.to_string()
        } else {
            response.body_text().trim().to_string()
        };
        LrsError::Protocol {
            status: response.status,
            message,
        }
    }
}
