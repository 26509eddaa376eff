//! Token session entity model.
//!
//! Only the token scheme persists sessions; the legacy scheme has no
//! server-side record (the cookie alone carries the identity).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A server-side session record resolved from an opaque token cookie.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuthSession {
    /// Unique session identifier.
    pub id: Uuid,
    /// The user this session belongs to.
    pub user_id: Uuid,
    /// The opaque session token carried by the cookie.
    #[serde(skip_serializing)]
    pub token: String,
    /// User-Agent header value at login.
    pub user_agent: Option<String>,
    /// IP address from which the session was created.
    pub ip_address: Option<String>,
    /// When the session was created (login time).
    pub created_at: DateTime<Utc>,
    /// When the session expires.
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    /// Check whether the session has expired.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Data required to create a new token session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAuthSession {
    /// The user this session belongs to.
    pub user_id: Uuid,
    /// The opaque session token.
    pub token: String,
    /// User-Agent header.
    pub user_agent: Option<String>,
    /// Client IP address.
    pub ip_address: Option<String>,
    /// When the session expires.
    pub expires_at: DateTime<Utc>,
}
