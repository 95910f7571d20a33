/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

use serde::{Deserialize, Serialize};

/// Successful login response
///
/// The server answers a valid login with a JSON body carrying the session
/// token; a 2xx body without a `token` field is treated as a protocol error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque session token
    pub token: String,
}
