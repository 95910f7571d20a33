/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 13/11/25
******************************************************************************/

//! Authenticated HTTP transport
//!
//! Every request goes out with an `Authorization: Bearer {token}` header
//! built from the current session token and a JSON content type, with
//! caller-supplied headers winning on conflict. A 401 response forces a
//! local logout before the call fails with [`AppError::SessionExpired`];
//! callers cannot opt out of that coupling.

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::http::RequestOptions;
use crate::session::auth::Auth;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client as HttpInternalClient, Method, Response, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Authenticated request surface of the warehouse client
///
/// All methods return the raw [`Response`]; status code and body are left
/// to the caller.
#[async_trait]
pub trait WarehouseHttpClient: Send + Sync {
    /// Issues an authenticated request against the configured API origin
    ///
    /// # Arguments
    /// * `endpoint` - Relative endpoint path (e.g. `/items`)
    /// * `options` - Method, extra headers and body for this call
    ///
    /// # Returns
    /// * `Ok(Response)` - The raw response, any status except 401
    /// * `Err(AppError::SessionExpired)` - The server answered 401; the
    ///   session has already been evicted and the logout hook fired
    /// * `Err(AppError::Connection)` - Network-level failure
    async fn fetch_auth(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Response, AppError>;

    /// Authenticated GET request
    async fn get(&self, endpoint: &str) -> Result<Response, AppError>;

    /// Authenticated POST request with a JSON body
    async fn post(&self, endpoint: &str, body: Value) -> Result<Response, AppError>;

    /// Authenticated PUT request with a JSON body
    async fn put(&self, endpoint: &str, body: Value) -> Result<Response, AppError>;

    /// Authenticated DELETE request
    async fn delete(&self, endpoint: &str) -> Result<Response, AppError>;
}

/// Default [`WarehouseHttpClient`] implementation backed by reqwest
pub struct WarehouseHttpClientImpl {
    config: Arc<Config>,
    auth: Arc<Auth>,
    http: HttpInternalClient,
}

impl WarehouseHttpClientImpl {
    /// Creates a new authenticated HTTP client
    ///
    /// # Arguments
    /// * `config` - Configuration with the API origin and timeout
    /// * `auth` - Session client providing the current token
    pub fn new(config: Arc<Config>, auth: Arc<Auth>) -> Self {
        let http = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()
            .expect("reqwest client");

        Self { config, auth, http }
    }

    /// Joins an endpoint path onto the configured base URL
    fn rest_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Builds the header map for one call: bearer and JSON content type
    /// first, then caller headers, caller headers winning on conflict
    fn build_headers(&self, options: &RequestOptions) -> Result<HeaderMap, AppError> {
        let mut headers = HeaderMap::new();

        // The token may be absent; the header is still sent with an empty
        // token and the server answers 401
        let token = self.auth.token().unwrap_or_default();
        let bearer = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| AppError::InvalidInput(e.to_string()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| AppError::InvalidInput(e.to_string()))?;
            headers.insert(name, value);
        }

        Ok(headers)
    }
}

#[async_trait]
impl WarehouseHttpClient for WarehouseHttpClientImpl {
    async fn fetch_auth(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Response, AppError> {
        let url = self.rest_url(endpoint);
        let headers = self.build_headers(&options)?;

        debug!("{} {}", options.method, url);

        let mut request = self
            .http
            .request(options.method.clone(), &url)
            .headers(headers);

        if let Some(body) = &options.body {
            request = request.json(body);
        }

        let response = request.send().await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status == StatusCode::UNAUTHORIZED {
            warn!("Unauthorized response, evicting session");
            if let Err(e) = self.auth.logout() {
                warn!("Logout after 401 failed: {}", e);
            }
            return Err(AppError::SessionExpired);
        }

        Ok(response)
    }

    async fn get(&self, endpoint: &str) -> Result<Response, AppError> {
        self.fetch_auth(endpoint, RequestOptions::new()).await
    }

    async fn post(&self, endpoint: &str, body: Value) -> Result<Response, AppError> {
        let options = RequestOptions::new().with_method(Method::POST).with_body(&body)?;
        self.fetch_auth(endpoint, options).await
    }

    async fn put(&self, endpoint: &str, body: Value) -> Result<Response, AppError> {
        let options = RequestOptions::new().with_method(Method::PUT).with_body(&body)?;
        self.fetch_auth(endpoint, options).await
    }

    async fn delete(&self, endpoint: &str) -> Result<Response, AppError> {
        let options = RequestOptions::new().with_method(Method::DELETE);
        self.fetch_auth(endpoint, options).await
    }
}
