//! API Response types
//!
//! The backend wraps every successful payload as `{ "data": ..., "message": ... }`
//! and failures as `{ "message": ... }` with a non-2xx status.

use serde::{Deserialize, Serialize};

/// Unified success envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            message: None,
        }
    }
}

/// Error body carried on non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
