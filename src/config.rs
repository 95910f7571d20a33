/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

use crate::constants::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, TOKEN_STORAGE_KEY};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the warehouse API
pub struct Credentials {
    /// Username for the warehouse account
    pub username: String,
    /// Password for the warehouse account
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the warehouse REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the persisted token store
pub struct StorageConfig {
    /// Key (file name) under which the token is persisted
    pub token_key: String,
    /// Directory holding the persisted token entry
    pub token_dir: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the warehouse client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Persisted token store configuration
    pub storage: StorageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from environment variables
    ///
    /// Loads `.env` if present, then reads each setting with a logged
    /// fallback to its compile-time default.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username = get_env_or_default("WAREHOUSE_USERNAME", String::new());
        let password = get_env_or_default("WAREHOUSE_PASSWORD", String::new());

        // Credentials are only needed for login, not for token-only usage
        if username.is_empty() {
            warn!("WAREHOUSE_USERNAME not found in environment variables or .env file");
        }
        if password.is_empty() {
            warn!("WAREHOUSE_PASSWORD not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { username, password },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("WAREHOUSE_API_URL", String::from(DEFAULT_API_URL)),
                timeout: get_env_or_default("WAREHOUSE_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            storage: StorageConfig {
                token_key: get_env_or_default(
                    "WAREHOUSE_TOKEN_KEY",
                    String::from(TOKEN_STORAGE_KEY),
                ),
                token_dir: get_env_or_default("WAREHOUSE_TOKEN_DIR", String::from(".")),
            },
        }
    }
}
