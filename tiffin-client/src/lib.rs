//! Tiffin Client - HTTP adapter for the restaurant backend
//!
//! Wraps outgoing REST calls, attaches the bearer credential read fresh
//! from durable storage per request, and centralizes base endpoint
//! configuration. No retries and no automatic token refresh.

pub mod config;
pub mod error;
pub mod http;
pub mod multipart;
pub mod token;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{Api, HttpApi};
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore, TokenStoreError};

// Re-export shared types for convenience
pub use shared::client::{AuthData, LoginRequest, RegisterRequest, TokenPair};
