//! Client error types
//!
//! Mirrors what a store call can actually report: a transport failure, a
//! status-mapped store rejection, or a success status whose body does not
//! parse as the store's response envelope. Store error payloads are carried
//! verbatim in the message; nothing here retries or suppresses.

use thiserror::Error;

/// Error produced by a store call
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, TLS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Store replied with success but the body was not a valid envelope
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required (401)
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied (403)
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Store-side validation rejection (400/422)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal store error (5xx)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
