//! Durable credential storage
//!
//! The access/refresh token pair outlives the in-memory session and is
//! read at startup to attempt session restoration. The HTTP adapter
//! reads the access token fresh per request, so a logout or refresh
//! takes effect on the very next call.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use shared::client::TokenPair;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Durable credential storage seam
///
/// Process-wide single resource; concurrent writers race with
/// last-write-wins semantics.
pub trait TokenStore: Send + Sync {
    /// Persist the credential pair, replacing any previous one.
    fn save(&self, tokens: &TokenPair) -> Result<(), TokenStoreError>;

    /// Load the stored pair, if any.
    fn load(&self) -> Option<TokenPair>;

    /// Remove the stored pair.
    fn clear(&self) -> Result<(), TokenStoreError>;

    /// Current access token, read fresh (never cached by callers).
    fn access_token(&self) -> Option<String> {
        self.load().map(|pair| pair.access_token)
    }
}

/// File-backed token store (`tokens.json` under the app data dir)
pub struct FileTokenStore {
    file_path: PathBuf,
}

impl FileTokenStore {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl TokenStore for FileTokenStore {
    fn save(&self, tokens: &TokenPair) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(tokens)?;
        std::fs::write(&self.file_path, content)?;
        tracing::debug!(path = %self.file_path.display(), "Credentials saved");
        Ok(())
    }

    fn load(&self) -> Option<TokenPair> {
        let content = std::fs::read_to_string(&self.file_path).ok()?;
        match serde_json::from_str(&content) {
            Ok(pair) => Some(pair),
            Err(err) => {
                tracing::warn!(path = %self.file_path.display(), %err, "Corrupt token file ignored");
                None
            }
        }
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        if self.file_path.exists() {
            std::fs::remove_file(&self.file_path)?;
            tracing::debug!(path = %self.file_path.display(), "Credentials cleared");
        }
        Ok(())
    }
}

/// In-memory token store (tests and token-less configurations)
#[derive(Default)]
pub struct MemoryTokenStore {
    tokens: RwLock<Option<TokenPair>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, tokens: &TokenPair) -> Result<(), TokenStoreError> {
        *self.tokens.write().unwrap_or_else(|e| e.into_inner()) = Some(tokens.clone());
        Ok(())
    }

    fn load(&self) -> Option<TokenPair> {
        self.tokens
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        *self.tokens.write().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}
