//! Client configuration

use std::path::PathBuf;

/// Configuration for connecting to the restaurant backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "http://localhost:5000/api/v1")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Durable token file; `None` keeps credentials in memory only
    pub token_path: Option<PathBuf>,
}

impl ClientConfig {
    /// Create a new configuration with defaults
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            token_path: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Persist credentials to the given file between runs
    pub fn with_token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = Some(path.into());
        self
    }

    /// Server origin (base URL without the API path), for image resolution
    pub fn origin(&self) -> String {
        let trimmed = self.base_url.trim_end_matches('/');
        match trimmed.find("/api") {
            Some(idx) => trimmed[..idx].to_string(),
            None => trimmed.to_string(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:5000/api/v1")
    }
}
