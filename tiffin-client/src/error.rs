//! Client error types

use thiserror::Error;

/// Client error type
///
/// `Validation` failures are raised before any request is issued;
/// `Network` means the request could not complete; `Status` carries the
/// server's failure status and message.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Client-side validation failed, no HTTP call was made
    #[error("Validation error: {0}")]
    Validation(String),

    /// Request could not complete
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Server responded with a failure status
    #[error("HTTP {code}: {message}")]
    Status { code: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Durable credential storage failed
    #[error("Token storage error: {0}")]
    Storage(#[from] crate::token::TokenStoreError),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
