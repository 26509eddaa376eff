//! The authorization gate.
//!
//! Every privileged handler funnels through these two checks, applied to
//! whatever identity the configured resolver produced. Identity
//! resolution fails open to anonymous; the gate fails closed.

use sitekit_core::error::AppError;
use sitekit_core::result::AppResult;

use crate::session::SessionUser;

/// Require an admin identity.
///
/// Anonymous and non-admin sessions both fail with `Authorization`
/// (HTTP 403): an admin-gated endpoint never reveals whether the caller
/// was recognised.
pub fn require_admin(session: Option<SessionUser>) -> AppResult<SessionUser> {
    match session {
        Some(user) if user.is_admin() => Ok(user),
        _ => Err(AppError::forbidden("Admin role required")),
    }
}

/// Require any resolved identity.
///
/// Anonymous sessions fail with `Authentication` (HTTP 401).
pub fn require_user(session: Option<SessionUser>) -> AppResult<SessionUser> {
    session.ok_or_else(|| AppError::unauthenticated("Authentication required"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitekit_core::error::ErrorKind;
    use sitekit_entity::user::UserRole;
    use uuid::Uuid;

    fn session_user(role: UserRole) -> SessionUser {
        SessionUser {
            id: Uuid::new_v4(),
            email: "person@example.com".to_string(),
            display_name: None,
            role,
        }
    }

    #[test]
    fn test_admin_passes_the_admin_gate() {
        let user = session_user(UserRole::Admin);
        assert!(require_admin(Some(user)).is_ok());
    }

    #[test]
    fn test_non_admin_is_forbidden() {
        let err = require_admin(Some(session_user(UserRole::User))).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }

    #[test]
    fn test_anonymous_is_forbidden_not_unauthenticated() {
        let err = require_admin(None).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }

    #[test]
    fn test_require_user_rejects_anonymous() {
        let err = require_user(None).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);

        assert!(require_user(Some(session_user(UserRole::User))).is_ok());
    }
}
