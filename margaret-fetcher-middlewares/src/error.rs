//! Middleware error types.

use thiserror::Error;

/// Errors surfaced by response middlewares.
///
/// An empty response is not an error: the JSON parser normalizes it to
/// `data = None`. Everything else is reported verbatim to the caller.
#[derive(Debug, Error)]
pub enum MiddlewareError {
    /// Body text was read but is not valid JSON.
    #[error("Malformed JSON body (HTTP {status}): {source}")]
    MalformedJson {
        /// HTTP status code of the response.
        status: u16,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// The transport failed while reading the body.
    #[error("Failed to read response body: {0}")]
    StreamRead(#[from] reqwest::Error),

    /// A non-reqwest body source failed while reading.
    #[error("Failed to read response body: {0}")]
    StreamReadOther(String),

    /// The body was already drained by an earlier read.
    #[error("Response body already consumed")]
    BodyConsumed,

    /// Parsed data could not be converted to the requested type.
    #[error("Failed to deserialize response data: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// Failure raised by a caller-provided middleware.
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl MiddlewareError {
    /// Create a malformed JSON error.
    pub fn malformed_json(status: u16, source: serde_json::Error) -> Self {
        Self::MalformedJson { status, source }
    }

    /// Create a body read error for sources other than reqwest.
    pub fn stream_read(msg: impl Into<String>) -> Self {
        Self::StreamReadOther(msg.into())
    }

    /// Check if the body was present but not JSON.
    pub fn is_malformed_json(&self) -> bool {
        matches!(self, Self::MalformedJson { .. })
    }

    /// Check if reading the body failed.
    pub fn is_stream_read(&self) -> bool {
        matches!(self, Self::StreamRead(_) | Self::StreamReadOther(_))
    }

    /// Get the HTTP status associated with this error, if known.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::MalformedJson { status, .. } => Some(*status),
            Self::StreamRead(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for middleware operations.
pub type MiddlewareResult<T> = Result<T, MiddlewareError>;
