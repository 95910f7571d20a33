// Session client for the warehouse API

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::requests::LoginRequest;
use crate::model::responses::LoginResponse;
use crate::session::store::TokenStore;
use reqwest::Client;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Observer invoked after every logout, explicit or 401-forced
///
/// Replaces the hard-coded entry-page navigation of the original frontend:
/// callers decide what "navigate away" means in their environment.
pub type LogoutHook = Arc<dyn Fn() + Send + Sync>;

/// Session client for the warehouse API
///
/// Owns the token state for one client instance and provides login, token
/// get/set and logout. At most one token is active at any time; every
/// mutating operation writes the in-memory copy and the persisted store
/// together, keeping them consistent.
pub struct Auth {
    config: Arc<Config>,
    http: Client,
    store: Arc<dyn TokenStore>,
    token: RwLock<Option<String>>,
    on_logout: RwLock<Option<LogoutHook>>,
}

impl Auth {
    /// Creates a new session client
    ///
    /// Any token found in the persisted store is loaded into memory, so a
    /// session survives process restarts without a fresh login.
    ///
    /// # Arguments
    /// * `config` - Configuration with API settings
    /// * `store` - Persisted token storage
    pub fn new(config: Arc<Config>, store: Arc<dyn TokenStore>) -> Self {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()
            .expect("reqwest client");

        let token = match store.get() {
            Ok(token) => {
                if token.is_some() {
                    debug!("Recovered persisted session token");
                }
                token
            }
            Err(e) => {
                warn!("Failed to read persisted token: {}", e);
                None
            }
        };

        Self {
            config,
            http,
            store,
            token: RwLock::new(token),
            on_logout: RwLock::new(None),
        }
    }

    /// Joins a path onto the configured base URL
    fn rest_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Performs login against the warehouse API
    ///
    /// Sends `POST {base}/login` with JSON-encoded credentials. On success
    /// the token from the response body is returned; token state is NOT
    /// mutated here, the caller decides whether to adopt it via
    /// [`set_token`](Self::set_token).
    ///
    /// # Arguments
    /// * `username` - Non-empty account username
    /// * `password` - Non-empty account password
    ///
    /// # Returns
    /// * `Ok(String)` - The session token issued by the server
    /// * `Err(AppError::InvalidInput)` - Empty username or password
    /// * `Err(AppError::InvalidCredentials)` - Any non-success login response
    /// * `Err(AppError::Connection)` - Network-level failure
    /// * `Err(AppError::Json)` - Success response without a usable token field
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        if username.is_empty() || password.is_empty() {
            return Err(AppError::InvalidInput(
                "username and password must not be empty".to_string(),
            ));
        }

        let url = self.rest_url("login");
        let body = LoginRequest::new(username, password);

        debug!("Sending login request to: {}", url);

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Login failed with status {}: {}", status, body);
            return Err(AppError::InvalidCredentials);
        }

        // A 2xx body without a token field is a protocol error, not a
        // credentials problem
        let text = response.text().await?;
        let json: LoginResponse = serde_json::from_str(&text)?;

        info!("✓ Login successful");
        Ok(json.token)
    }

    /// Adopts a token as the active session
    ///
    /// Writes the persisted store first, then the in-memory copy; if the
    /// store write fails the operation is not considered complete and the
    /// previous token stays active.
    pub fn set_token(&self, token: &str) -> Result<(), AppError> {
        self.store.set(token)?;
        *self.token.write().expect("token lock") = Some(token.to_string());
        debug!("Session token updated");
        Ok(())
    }

    /// Current session token, `None` when logged out
    pub fn token(&self) -> Option<String> {
        self.token.read().expect("token lock").clone()
    }

    /// Registers the logout observer
    ///
    /// The hook fires exactly once per logout, covering both explicit
    /// [`logout`](Self::logout) calls and the forced logout performed by the
    /// transport layer on a 401 response.
    pub fn on_logout(&self, hook: LogoutHook) {
        *self.on_logout.write().expect("hook lock") = Some(hook);
    }

    /// Ends the session locally
    ///
    /// Clears the persisted entry first, then the in-memory token, then
    /// fires the logout hook. If the store clear fails the session stays
    /// active in both places, mirroring [`set_token`](Self::set_token).
    /// No server-side invalidation call is made.
    pub fn logout(&self) -> Result<(), AppError> {
        info!("Logging out");

        self.store.clear()?;
        *self.token.write().expect("token lock") = None;

        if let Some(hook) = self.on_logout.read().expect("hook lock").as_ref() {
            hook();
        }

        info!("✓ Logged out successfully");
        Ok(())
    }
}
