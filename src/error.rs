//! Error types for Bot API calls.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while sending a message.
///
/// Transport errors never carry the request URL, since it embeds the bot token.
#[derive(Debug, Error)]
pub enum SendError {
    /// The request did not complete within its timeout
    #[error("Request timed out: {0}")]
    Timeout(#[source] reqwest::Error),
    /// Error during network communication
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),
    /// Non-success status with a body that is not a JSON envelope
    #[error("HTTP error: {status} - {body}")]
    Status {
        /// HTTP status returned by the server
        status: StatusCode,
        /// Cleaned up response body
        body: String,
    },
    /// Error during JSON serialization or deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// The Bot API answered with `ok: false`
    #[error("API error ({error_code:?}): {description}")]
    Api {
        /// `error_code` field of the envelope, if any
        error_code: Option<i64>,
        /// `description` field of the envelope
        description: String,
    },
    /// The response was JSON but had no `result` field
    #[error("Response has no `result` field")]
    MissingResult,
}

impl SendError {
    /// Builds a transport error, stripping the URL and separating timeouts.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Network(err)
        }
    }

    /// Whether the same request might succeed if sent again later.
    ///
    /// Nothing in this crate retries; the flag is for callers that do.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout(_) | Self::Network(_) => true,
            Self::Status { status, .. } => status.is_server_error(),
            Self::Api { error_code, .. } => matches!(error_code, Some(429 | 500..=599)),
            Self::Json(_) | Self::MissingResult => false,
        }
    }
}
