//! Error types for the accounts API client.
//!
//! # Design
//! Every failure is handed back to the caller; the library never logs or
//! swallows an error. The client does not tell 4xx apart from 5xx: any
//! status outside an operation's success set lands in `Api` with the raw
//! code and its reason phrase.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors returned by `Transport` and `AccountClient`.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be built: malformed URL or unencodable body.
    #[error("failed to build request: {0}")]
    RequestConstruction(String),

    /// The connection failed, timed out, or the body could not be read.
    #[error("network error: {0}")]
    Network(#[source] ureq::Error),

    /// The response body is larger than `ClientConfig::max_body_bytes`.
    #[error("response body exceeds the {limit} byte limit")]
    BodyTooLarge { limit: u64 },

    /// The server answered with a status outside the operation's success set.
    #[error("status == {status}, text == {status_text}")]
    Api { status: u16, status_text: String },

    /// The response body is not a valid `{"data": ...}` envelope.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status carried by an `Api` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Only network failures are worth retrying without investigation.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }
}
