//! Client-related types shared between stores and the HTTP client
//!
//! Request/response DTOs for the auth endpoints, and the durable
//! credential pair persisted between process runs.

use serde::{Deserialize, Serialize};

use crate::models::{User, UserRole};

/// Registration request (`POST /users/register`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Required non-empty when `role` is admin; validated client-side
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_secret: Option<String>,
}

/// Login request (`POST /users/login`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Credential pair persisted in durable storage
///
/// Presence does not guarantee validity; the server is authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Auth response data (register and login share this shape)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}

impl AuthData {
    pub fn token_pair(&self) -> TokenPair {
        TokenPair {
            access_token: self.access_token.clone(),
            refresh_token: self.refresh_token.clone(),
        }
    }
}
