//! Error types for the store API client.
//!
//! # Design
//! The client never decides what a status code means for the user. Every
//! non-2xx response lands in `HttpError` with the raw status and body, and
//! the controllers map whole failures to fixed messages. `Transport` wraps
//! whatever the host's HTTP stack reported before a response existed.

use thiserror::Error;

/// Failure reported by a `Transport` before any response was received
/// (connect error, timeout, I/O).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors returned by `ProductClient` parse methods and `ProductsApi` calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
