//! Session extractors: resolve the cookie jar through the configured
//! scheme and, for `AdminUser`, apply the authorization gate.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use sitekit_auth::gate;
use sitekit_auth::session::resolver::{SessionResolver, SessionUser};

use crate::error::ApiError;
use crate::state::AppState;

/// The request's resolved session, or `None` for anonymous callers.
///
/// This extractor never rejects; endpoints that merely *may* use an
/// identity (e.g. registration intake) take it and inspect the inner
/// option.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Option<SessionUser>);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Cookie jar extraction is infallible.
        let jar = match CookieJar::from_request_parts(parts, state).await {
            Ok(jar) => jar,
            Err(never) => match never {},
        };
        Ok(CurrentUser(state.session_resolver.resolve(&jar).await))
    }
}

/// A gate-checked admin identity. Rejects with 403 for anonymous and
/// non-admin callers alike, before the handler body runs.
#[derive(Debug, Clone)]
pub struct AdminUser(pub SessionUser);

impl std::ops::Deref for AdminUser {
    type Target = SessionUser;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Cookie jar extraction is infallible.
        let jar = match CookieJar::from_request_parts(parts, state).await {
            Ok(jar) => jar,
            Err(never) => match never {},
        };
        let session = state.session_resolver.resolve(&jar).await;
        let user = gate::require_admin(session)?;
        Ok(AdminUser(user))
    }
}
