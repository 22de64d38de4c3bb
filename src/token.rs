//! Durable bearer token storage.
//!
//! The token lives in a single named slot, independent of the in-memory
//! session, so a fresh process can rehydrate its session from it. Session
//! lifecycle operations are the only writers; the HTTP client core reads the
//! slot on every call.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::warn;

use crate::constants::TOKEN_STORAGE_KEY;

/// Durable client-side storage for the bearer token.
///
/// Implementations log storage failures instead of surfacing them; a missing
/// or unreadable token is indistinguishable from a logged-out state.
pub trait TokenStore: Send + Sync {
    /// Read the stored token, if any.
    fn load(&self) -> Option<String>;

    /// Persist a token, replacing any previous value.
    fn save(&self, token: &str);

    /// Remove the stored token. Idempotent.
    fn clear(&self);
}

/// File-backed token store under the platform data directory.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store the token under the platform data directory
    /// (e.g. `~/.local/share/lockhaven/auth_token`).
    pub fn new() -> Self {
        let dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lockhaven");
        Self::in_dir(dir)
    }

    /// Store the token under an explicit directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(TOKEN_STORAGE_KEY),
        }
    }

    /// Path of the token file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Default for FileTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(token) => {
                let token = token.trim().to_string();
                if token.is_empty() {
                    None
                } else {
                    Some(token)
                }
            }
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                warn!(path = %self.path.display(), "failed to read token: {}", err);
                None
            }
        }
    }

    fn save(&self, token: &str) {
        if let Some(parent) = self.path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                warn!(path = %parent.display(), "failed to create token directory: {}", err);
                return;
            }
        }
        if let Err(err) = fs::write(&self.path, token) {
            warn!(path = %self.path.display(), "failed to persist token: {}", err);
        }
    }

    fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => {
                warn!(path = %self.path.display(), "failed to remove token: {}", err);
            }
        }
    }
}

/// In-memory token store for tests and embedded use.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().ok().and_then(|guard| guard.clone())
    }

    fn save(&self, token: &str) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = None;
        }
    }
}
