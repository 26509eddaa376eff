//! The unified session resolution contract.
//!
//! Two schemes exist side by side (legacy id-cookie and DB-backed token);
//! both implement [`SessionResolver`] so authorization logic never
//! branches on which scheme issued the session. The active scheme is
//! selected once, from configuration.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sitekit_core::error::AppError;
use sitekit_entity::user::{User, UserRole};

use super::legacy::LegacySessionManager;
use super::token::TokenSessionManager;

/// The identity a session resolves to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    /// User id.
    pub id: Uuid,
    /// Email address.
    pub email: String,
    /// Display name.
    pub display_name: Option<String>,
    /// Authoritative role from the user table.
    pub role: UserRole,
}

impl SessionUser {
    /// Whether this identity may use the content-management API.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<User> for SessionUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            display_name: user.display_name,
            role: user.role,
        }
    }
}

/// Resolves the current request's session, if any.
///
/// Resolution fails open to anonymous: an absent cookie, an unparseable
/// value, a lookup miss, or a backend error all yield `None`. Privilege
/// decisions on top of the resolved identity are made by the gate, which
/// fails closed.
#[async_trait]
pub trait SessionResolver: Send + Sync + 'static {
    /// Resolve the session carried by the request's cookies.
    async fn resolve(&self, jar: &CookieJar) -> Option<SessionUser>;
}

/// Which session scheme is active for login and resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionScheme {
    /// Cookie value is the stringified user id; no server-side record.
    Legacy,
    /// Opaque random token resolved against the session table.
    Token,
}

impl FromStr for SessionScheme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "token" => Ok(Self::Token),
            _ => Err(AppError::configuration(format!(
                "Unknown session scheme: '{s}'. Supported: legacy, token"
            ))),
        }
    }
}

/// Dispatches session resolution to the configured scheme.
#[derive(Clone)]
pub struct SessionResolverDispatch {
    scheme: SessionScheme,
    legacy: Arc<LegacySessionManager>,
    token: Arc<TokenSessionManager>,
}

impl SessionResolverDispatch {
    /// Create a dispatch over both managers with the configured scheme.
    pub fn new(
        scheme: SessionScheme,
        legacy: Arc<LegacySessionManager>,
        token: Arc<TokenSessionManager>,
    ) -> Self {
        Self {
            scheme,
            legacy,
            token,
        }
    }

    /// The active scheme.
    pub fn scheme(&self) -> SessionScheme {
        self.scheme
    }
}

impl std::fmt::Debug for SessionResolverDispatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionResolverDispatch")
            .field("scheme", &self.scheme)
            .finish()
    }
}

#[async_trait]
impl SessionResolver for SessionResolverDispatch {
    async fn resolve(&self, jar: &CookieJar) -> Option<SessionUser> {
        match self.scheme {
            SessionScheme::Legacy => self.legacy.resolve(jar).await,
            SessionScheme::Token => self.token.resolve(jar).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_from_str() {
        assert_eq!(
            "legacy".parse::<SessionScheme>().unwrap(),
            SessionScheme::Legacy
        );
        assert_eq!(
            "Token".parse::<SessionScheme>().unwrap(),
            SessionScheme::Token
        );
        assert!("jwt".parse::<SessionScheme>().is_err());
    }
}
