/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! Error types for the warehouse client
//!
//! A single [`AppError`] enum covers the three user-visible failure kinds of
//! the session layer (invalid credentials, connection failure, expired
//! session) together with the ambient conversions the rest of the crate
//! needs (JSON, IO, input validation).

use std::fmt;

/// Main error type for the warehouse client
#[derive(Debug)]
pub enum AppError {
    /// Login rejected by the server (any non-success login response)
    InvalidCredentials,
    /// Network-level failure (timeout, DNS, refused connection)
    Connection(String),
    /// Authenticated request answered with 401; the client has already
    /// logged out by the time this error is visible
    SessionExpired,
    /// Caller-supplied input was rejected before any network call
    InvalidInput(String),
    /// JSON serialization or deserialization failure
    Json(serde_json::Error),
    /// Filesystem failure in the token store
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidCredentials => write!(f, "invalid credentials"),
            AppError::Connection(msg) => write!(f, "connection error: {msg}"),
            AppError::SessionExpired => write!(f, "session expired"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Connection(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
