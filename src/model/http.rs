/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

use crate::error::AppError;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

/// Per-call request configuration for authenticated requests
///
/// Transient value object describing method, extra headers and body for a
/// single call. It is not persisted and not shared across calls. The
/// default is a GET with no extra headers and no body.
///
/// Caller-supplied headers take precedence over the client's defaults
/// (`Authorization`, `Content-Type`) when names collide.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method, GET by default
    pub method: Method,
    /// Extra headers applied on top of the client defaults
    pub headers: Vec<(String, String)>,
    /// Optional JSON body
    pub body: Option<Value>,
}

impl RequestOptions {
    /// Creates an empty request configuration (GET, no headers, no body)
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the HTTP method
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Adds a header, overriding the client default of the same name
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Sets a JSON body from any serializable value
    ///
    /// # Errors
    /// Returns `AppError::Json` if the value cannot be serialized
    pub fn with_body<B: Serialize>(mut self, body: &B) -> Result<Self, AppError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}
