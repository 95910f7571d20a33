//! Session management for the warehouse API
//!
//! The session layer owns the token lifecycle: absent at start (recovered
//! from the persisted store when present), set after a successful login,
//! cleared on logout or when an authenticated request comes back 401.

/// Session client: login, token state, logout
pub mod auth;
/// Persisted token storage abstraction
pub mod store;

pub use auth::{Auth, LogoutHook};
pub use store::{FileTokenStore, InMemoryTokenStore, TokenStore};
