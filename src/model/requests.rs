/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

use serde::{Deserialize, Serialize};

/// Body of the login request, `POST {base}/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username for the warehouse account
    pub username: String,
    /// Password for the warehouse account
    pub password: String,
}

impl LoginRequest {
    /// Creates a new login request body
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}
