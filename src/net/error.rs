//! API failure classification.
//!
//! ERROR HANDLING
//! ==============
//! `Rejected` is the expected failure path (the API answered and said no).
//! `Transport` and `Decode` are faults: callers log them and show a generic
//! message. Nothing is retried.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// A response arrived but its body was not the expected JSON.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// The API answered with `success = false` or a non-2xx status.
    #[error("rejected by api (status {status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },
}

impl ApiError {
    /// Server-provided message, if this is a rejection that carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Transport and decode failures are faults worth a console error.
    pub fn is_fault(&self) -> bool {
        !matches!(self, Self::Rejected { .. })
    }
}
