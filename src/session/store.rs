/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 13/11/25
******************************************************************************/

//! Persisted token storage
//!
//! The session token survives process restarts through a [`TokenStore`].
//! The store holds at most one entry, the raw token string under a fixed
//! key; it is synchronous by contract, mirroring the single-threaded
//! key-value storage the client was designed around.

use crate::config::Config;
use crate::error::AppError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::debug;

/// Capability interface for the persisted session token
///
/// Injected into [`crate::session::auth::Auth`] so the session client is
/// constructible with a fake store in tests; no global singleton involved.
pub trait TokenStore: Send + Sync {
    /// Reads the persisted token, `None` when no entry exists
    fn get(&self) -> Result<Option<String>, AppError>;
    /// Writes the token, replacing any previous entry
    fn set(&self, token: &str) -> Result<(), AppError>;
    /// Removes the entry if present
    fn clear(&self) -> Result<(), AppError>;
}

/// In-memory token store
///
/// Default store for tests and for callers that do not want persistence.
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl InMemoryTokenStore {
    /// Creates an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for InMemoryTokenStore {
    fn get(&self) -> Result<Option<String>, AppError> {
        Ok(self.token.lock().expect("token store lock").clone())
    }

    fn set(&self, token: &str) -> Result<(), AppError> {
        *self.token.lock().expect("token store lock") = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        *self.token.lock().expect("token store lock") = None;
        Ok(())
    }
}

/// File-backed token store
///
/// Persists the raw token string to `{dir}/{key}`, one file per entry.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store persisting under `dir/key`
    pub fn new(dir: impl Into<PathBuf>, key: &str) -> Self {
        let mut path = dir.into();
        path.push(key);
        Self { path }
    }

    /// Creates a store from the configured storage section
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.storage.token_dir, &config.storage.token_key)
    }

    /// Path of the persisted entry
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Result<Option<String>, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(token) => Ok(Some(token)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, token: &str) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        debug!("Token persisted to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
