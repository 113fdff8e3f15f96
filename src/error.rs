//! Client error types
//!
//! A non-200 response is not an exception: its JSON body becomes a typed
//! [`Failure`] carried by [`ClientError::Failure`], so callers can match on
//! the envelope the backend sent.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error envelope returned by the backend on any non-success status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub code: i32,
    pub reason: String,
    pub message: String,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{} (code {})", self.reason, self.code)
        } else {
            write!(f, "{} (code {}): {}", self.reason, self.code, self.message)
        }
    }
}

/// Client-wide error type
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Backend answered with a non-200 status and a failure envelope
    #[error("Request failed with status {status}: {failure}")]
    Failure { status: u16, failure: Failure },

    /// Backend answered with a non-200 status and JSON of another shape
    #[error("Request rejected with status {status}: {body}")]
    Rejected { status: u16, body: serde_json::Value },

    /// Response body was not JSON, or not the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    /// Request body or query could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Network, TLS or URL error
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Token cookie present but not decodable
    #[error("Invalid token: {0}")]
    InvalidToken(String),
}

impl ClientError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Failure { .. } => "REQUEST_FAILED",
            Self::Rejected { .. } => "REQUEST_REJECTED",
            Self::MalformedResponse(_) => "MALFORMED_RESPONSE",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::InvalidToken(_) => "INVALID_TOKEN",
        }
    }

    /// HTTP status of the response, when one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Failure { status, .. } | Self::Rejected { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The backend's failure envelope, if this error carries one
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Failure { failure, .. } => Some(failure),
            _ => None,
        }
    }

    /// Build the error for a non-200 response from its parsed JSON body
    pub(crate) fn from_error_body(status: u16, body: serde_json::Value) -> Self {
        match serde_json::from_value::<Failure>(body.clone()) {
            Ok(failure) => Self::Failure { status, failure },
            Err(_) => Self::Rejected { status, body },
        }
    }
}

/// Result type alias using ClientError
pub type ClientResult<T> = Result<T, ClientError>;
