//! Drive backend error types.
//!
//! This module defines the error types that can occur while talking to the
//! Drive API. None of them are retried locally; whatever retry semantics the
//! HTTP client offers are inherited unmodified.

use thiserror::Error;

/// Errors that can occur during Drive backend operations.
#[derive(Debug, Clone, Error)]
pub enum DriveError {
    /// Bad base URL or missing credentials at wiring time.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The request could not be sent (network, TLS, timeout).
    #[error("Transport error: {0}")]
    TransportError(String),

    /// The backend answered with a non-success status (auth failure, quota
    /// exceeded, malformed query).
    #[error("Drive API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// A success response body failed to deserialize.
    #[error("Decode error: {0}")]
    DecodeError(String),
}

impl DriveError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::TransportError(msg.into())
    }

    /// Create an API error from a status code and message.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Create a decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::DecodeError(msg.into())
    }
}
