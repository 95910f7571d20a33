/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/11/25
******************************************************************************/

//! # Warehouse Client Prelude
//!
//! Convenient single import for the commonly used types and traits of the
//! library.
//!
//! ## Usage
//!
//! ```rust
//! use warehouse_client::prelude::*;
//!
//! let config = Config::new();
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the warehouse client
pub use crate::config::{Config, Credentials, RestApiConfig, StorageConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// SESSION MANAGEMENT
// ============================================================================

/// Session client and logout observer type
pub use crate::session::auth::{Auth, LogoutHook};

/// Persisted token storage
pub use crate::session::store::{FileTokenStore, InMemoryTokenStore, TokenStore};

// ============================================================================
// TRANSPORT AND HTTP CLIENT
// ============================================================================

/// HTTP client trait
pub use crate::transport::http_client::WarehouseHttpClient;

/// HTTP client implementation
pub use crate::transport::http_client::WarehouseHttpClientImpl;

/// Per-call request configuration
pub use crate::model::http::RequestOptions;

// ============================================================================
// WIRE MODELS
// ============================================================================

/// Login request and response bodies
pub use crate::model::requests::LoginRequest;
pub use crate::model::responses::LoginResponse;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Formatting utilities
pub use crate::utils::format::{format_currency, format_date};

/// Input validation utilities
pub use crate::utils::validation::{InputPattern, validate_input};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};

/// Re-export reqwest types used at the API surface
pub use reqwest::{Method, Response, StatusCode};
