//! Client Error Types
//!
//! Failure cases the messaging client can run into. None of these are
//! fatal to the process; callers degrade to an empty or stale view.

use thiserror::Error;

/// Errors surfaced by the messaging client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure talking to an HTTP service.
    #[error("network error: {message}")]
    Network {
        /// Human-readable error message
        message: String,
    },

    /// The service answered with a non-success status.
    #[error("request failed with status {status}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body, or the status line when the body was unreadable
        body: String,
    },

    /// The relay connection has been torn down; no more frames can be queued.
    #[error("relay connection closed")]
    RelayClosed,

    /// JSON serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    Config(#[from] crate::shared::config::ConfigError),

    /// No signed-in user is available.
    #[error("no active identity")]
    NoIdentity,
}

impl ClientError {
    /// Create a new network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::network(err.to_string())
    }
}
