/**
 * Authentication Handler Types
 *
 * Request and response bodies of `POST /login`.
 */

use serde::{Deserialize, Serialize};

/// Login request
///
/// Credentials are accepted as sent; missing fields default to empty.
#[derive(Deserialize, Serialize, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub is_remember_me: bool,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("is_remember_me", &self.is_remember_me)
            .finish()
    }
}

/// Login response
///
/// Tells the client where to navigate once the session cookie is set.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub redirect_url: String,
    pub is_authorized: bool,
}

impl LoginResponse {
    pub fn authorized() -> Self {
        Self {
            redirect_url: "/".to_string(),
            is_authorized: true,
        }
    }
}
