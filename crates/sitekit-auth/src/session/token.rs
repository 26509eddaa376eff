//! The token session scheme: an opaque cookie backed by a session table.
//!
//! Resolution is two lookups: token to session row, then session row to
//! user. The second lookup attaches the authoritative role; a valid
//! session whose user row is missing resolves to anonymous, guarding
//! against identities that predate or diverge from the user table.

use std::sync::Arc;

use async_trait::async_trait;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{Duration, Utc};
use rand::Rng;
use tracing::{debug, warn};
use uuid::Uuid;

use sitekit_core::config::auth::SessionConfig;
use sitekit_core::result::AppResult;
use sitekit_database::repositories::session::AuthSessionRepository;
use sitekit_database::repositories::user::UserRepository;
use sitekit_entity::session::{AuthSession, CreateAuthSession};

use super::resolver::{SessionResolver, SessionUser};

/// Number of random bytes in a session token.
const TOKEN_BYTES: usize = 32;

/// Issues and resolves DB-backed token sessions.
#[derive(Debug, Clone)]
pub struct TokenSessionManager {
    sessions: Arc<AuthSessionRepository>,
    users: Arc<UserRepository>,
    cookie_name: String,
    max_age_days: u32,
    secure: bool,
}

impl TokenSessionManager {
    /// Create a new token session manager.
    pub fn new(
        sessions: Arc<AuthSessionRepository>,
        users: Arc<UserRepository>,
        config: &SessionConfig,
        secure: bool,
    ) -> Self {
        Self {
            sessions,
            users,
            cookie_name: config.token_cookie_name.clone(),
            max_age_days: config.max_age_days,
            secure,
        }
    }

    /// Create a session row and build its cookie.
    pub async fn create(
        &self,
        user_id: Uuid,
        user_agent: Option<String>,
        ip_address: Option<String>,
    ) -> AppResult<(AuthSession, Cookie<'static>)> {
        let token = generate_token();
        let expires_at = Utc::now() + Duration::days(self.max_age_days as i64);

        let session = self
            .sessions
            .create(&CreateAuthSession {
                user_id,
                token: token.clone(),
                user_agent,
                ip_address,
                expires_at,
            })
            .await?;

        let cookie = Cookie::build((self.cookie_name.clone(), token))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(time::Duration::days(self.max_age_days as i64))
            .build();

        Ok((session, cookie))
    }

    /// Delete the session row for the jar's token, if any. Best-effort:
    /// a failed delete is logged and the cookie is still cleared by the
    /// caller.
    pub async fn destroy(&self, jar: &CookieJar) {
        let Some(cookie) = jar.get(&self.cookie_name) else {
            return;
        };
        if let Err(e) = self.sessions.delete_by_token(cookie.value()).await {
            warn!(error = %e, "Failed to delete session row on logout");
        }
    }

    /// Build the removal cookie that clears the token unconditionally.
    pub fn removal(&self) -> Cookie<'static> {
        Cookie::build((self.cookie_name.clone(), ""))
            .path("/")
            .build()
    }
}

#[async_trait]
impl SessionResolver for TokenSessionManager {
    async fn resolve(&self, jar: &CookieJar) -> Option<SessionUser> {
        let token = jar.get(&self.cookie_name)?.value().to_string();

        let session = match self.sessions.find_valid_by_token(&token, Utc::now()).await {
            Ok(Some(session)) => session,
            Ok(None) => {
                debug!("Token cookie does not resolve to a live session");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "Session lookup failed during token resolution");
                return None;
            }
        };

        // Second lookup: the session alone does not carry the role.
        match self.users.find_by_id(session.user_id).await {
            Ok(Some(user)) => Some(user.into()),
            Ok(None) => {
                warn!(
                    user_id = %session.user_id,
                    "Valid session references a missing user; treating as anonymous"
                );
                None
            }
            Err(e) => {
                warn!(user_id = %session.user_id, error = %e, "User lookup failed during token resolution");
                None
            }
        }
    }
}

/// Generate an opaque URL-safe session token.
fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_unique_and_url_safe() {
        let a = generate_token();
        let b = generate_token();
        assert_ne!(a, b);
        assert_eq!(URL_SAFE_NO_PAD.decode(&a).unwrap().len(), TOKEN_BYTES);
        assert!(!a.contains('+') && !a.contains('/') && !a.contains('='));
    }
}
