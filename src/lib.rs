//! # Warehouse Client
//!
//! Async client library for the warehouse management REST API.
//!
//! The crate owns the session-token lifecycle for a single client instance:
//! it performs login against the fixed login endpoint, keeps the token in
//! memory and in an injected [`session::store::TokenStore`], attaches a
//! bearer header to every authenticated request, and evicts the token when
//! the server answers with `401 Unauthorized`.
//!
//! ## Example
//! ```ignore
//! use warehouse_client::prelude::*;
//!
//! let config = Arc::new(Config::new());
//! let store = Arc::new(FileTokenStore::from_config(&config));
//! let auth = Arc::new(Auth::new(config.clone(), store));
//!
//! let token = auth.login("admin", "secret").await?;
//! auth.set_token(&token)?;
//!
//! let client = WarehouseHttpClientImpl::new(config, auth);
//! let response = client.get("/items").await?;
//! ```

/// Application configuration loaded from environment variables
pub mod config;
/// Global compile-time constants
pub mod constants;
/// Error types for the library
pub mod error;
/// Wire-level request and response models
pub mod model;
/// Commonly used types and traits, importable in one line
pub mod prelude;
/// Session-token lifecycle management
pub mod session;
/// Authenticated HTTP transport
pub mod transport;
/// Formatting, validation, logging and environment helpers
pub mod utils;

/// Library version, taken from the crate manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version string
pub fn version() -> &'static str {
    VERSION
}
