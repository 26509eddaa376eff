//! Authentication and session configuration.

use serde::{Deserialize, Serialize};

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Which session scheme handles new logins and request resolution:
    /// `"legacy"` (cookie carries the user id) or `"token"` (opaque token
    /// backed by a session table).
    #[serde(default = "default_scheme")]
    pub scheme: String,
    /// Minimum password length for signup and password changes.
    #[serde(default = "default_password_min_length")]
    pub password_min_length: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            password_min_length: default_password_min_length(),
        }
    }
}

/// Session cookie configuration shared by both schemes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the legacy session cookie.
    #[serde(default = "default_legacy_cookie")]
    pub legacy_cookie_name: String,
    /// Name of the token session cookie.
    #[serde(default = "default_token_cookie")]
    pub token_cookie_name: String,
    /// Cookie max-age (and token lifetime) in days.
    #[serde(default = "default_max_age_days")]
    pub max_age_days: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            legacy_cookie_name: default_legacy_cookie(),
            token_cookie_name: default_token_cookie(),
            max_age_days: default_max_age_days(),
        }
    }
}

fn default_scheme() -> String {
    "token".to_string()
}

fn default_password_min_length() -> u32 {
    8
}

fn default_legacy_cookie() -> String {
    "session".to_string()
}

fn default_token_cookie() -> String {
    "sitekit_token".to_string()
}

fn default_max_age_days() -> u32 {
    7
}
