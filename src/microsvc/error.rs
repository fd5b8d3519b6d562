//! Error types for route handlers.

use std::error::Error;

use crate::book::validation::ValidationError;
use crate::store::StoreError;

/// Error type for route handler operations.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// No handler registered under this route name.
    #[error("unknown route: {0}")]
    UnknownRoute(String),
    /// Body or path parameter could not be decoded.
    #[error("decode failed: {0}")]
    DecodeFailed(String),
    /// Guard rejected the request before the handler ran.
    #[error("guard rejected request for route: {0}")]
    GuardRejected(String),
    /// Payload failed the validation policy.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    /// The addressed record does not exist.
    #[error("not found: {0}")]
    NotFound(String),
    /// The write collides with existing or concurrently changed state.
    #[error("conflict: {0}")]
    Conflict(String),
    /// Store failure (connectivity, I/O, serialization).
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    /// The reply could not be serialized.
    #[error("encode failed: {0}")]
    EncodeFailed(String),
    /// Other error.
    #[error("handler error: {0}")]
    Other(Box<dyn Error + Send + Sync>),
}

impl HandlerError {
    /// Map this error to an HTTP status code.
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::UnknownRoute(_) => 404,
            HandlerError::DecodeFailed(_) => 400,
            HandlerError::GuardRejected(_) => 400,
            HandlerError::Validation(_) => 400,
            HandlerError::NotFound(_) => 404,
            HandlerError::Conflict(_) => 409,
            HandlerError::Store(_) => 500,
            HandlerError::EncodeFailed(_) => 500,
            HandlerError::Other(_) => 500,
        }
    }
}
