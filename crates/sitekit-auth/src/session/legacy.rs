//! The legacy session scheme: the cookie value is the user id.
//!
//! There is no server-side session record. Validity reduces to "cookie
//! present and the id resolves in the user table", so resolution is a
//! single lookup and revocation is cookie deletion. Every failure mode
//! de-authenticates instead of erroring.

use std::sync::Arc;

use async_trait::async_trait;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::{debug, warn};
use uuid::Uuid;

use sitekit_core::config::auth::SessionConfig;
use sitekit_database::repositories::user::UserRepository;

use super::resolver::{SessionResolver, SessionUser};

/// Issues and resolves legacy id-cookie sessions.
#[derive(Debug, Clone)]
pub struct LegacySessionManager {
    users: Arc<UserRepository>,
    cookie_name: String,
    max_age_days: u32,
    secure: bool,
}

impl LegacySessionManager {
    /// Create a new legacy session manager.
    ///
    /// `secure` should be true in production so the cookie is only sent
    /// over HTTPS.
    pub fn new(users: Arc<UserRepository>, config: &SessionConfig, secure: bool) -> Self {
        Self {
            users,
            cookie_name: config.legacy_cookie_name.clone(),
            max_age_days: config.max_age_days,
            secure,
        }
    }

    /// Build the session cookie for a user id.
    ///
    /// Overwrites any prior cookie of the same name on the client.
    pub fn issue(&self, user_id: Uuid) -> Cookie<'static> {
        Cookie::build((self.cookie_name.clone(), user_id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(time::Duration::days(self.max_age_days as i64))
            .build()
    }

    /// Build the removal cookie that clears the session unconditionally.
    pub fn removal(&self) -> Cookie<'static> {
        Cookie::build((self.cookie_name.clone(), ""))
            .path("/")
            .build()
    }
}

#[async_trait]
impl SessionResolver for LegacySessionManager {
    async fn resolve(&self, jar: &CookieJar) -> Option<SessionUser> {
        let raw = jar.get(&self.cookie_name)?.value().to_string();

        let user_id = match Uuid::parse_str(raw.trim()) {
            Ok(id) => id,
            Err(_) => {
                debug!("Legacy session cookie is not a valid id");
                return None;
            }
        };

        match self.users.find_by_id(user_id).await {
            Ok(Some(user)) => Some(user.into()),
            Ok(None) => {
                debug!(%user_id, "Legacy session cookie does not resolve to a user");
                None
            }
            Err(e) => {
                warn!(%user_id, error = %e, "User lookup failed during session resolution");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    fn manager() -> LegacySessionManager {
        // The pool is never connected in these tests; cookie construction
        // is purely local.
        let pool = PgPoolOptions::new().connect_lazy("postgres://localhost/unused");
        LegacySessionManager::new(
            Arc::new(UserRepository::new(pool.unwrap())),
            &SessionConfig::default(),
            false,
        )
    }

    #[test]
    fn test_issue_sets_cookie_attributes() {
        let user_id = Uuid::new_v4();
        let cookie = manager().issue(user_id);

        assert_eq!(cookie.name(), "session");
        assert_eq!(cookie.value(), user_id.to_string());
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.max_age(), Some(time::Duration::days(7)));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn test_removal_cookie_is_empty() {
        let cookie = manager().removal();
        assert_eq!(cookie.name(), "session");
        assert_eq!(cookie.value(), "");
    }
}
