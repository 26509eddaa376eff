//! Auth handlers: signup, login, logout, me.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum_extra::extract::cookie::CookieJar;

use sitekit_auth::gate;
use sitekit_auth::session::resolver::{SessionScheme, SessionUser};
use sitekit_core::error::AppError;
use sitekit_entity::user::User;

use crate::dto::request::{LoginRequest, SignupRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::CurrentUser;
use crate::handlers::check;
use crate::state::AppState;

/// POST /api/auth/signup
///
/// Creates the account and logs it in by issuing a session cookie under
/// the configured scheme.
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Json(req): Json<SignupRequest>,
) -> ApiResult<(CookieJar, Json<ApiResponse<User>>)> {
    check(&req)?;

    let user = state
        .account_service
        .signup(&req.email, &req.password, req.display_name)
        .await?;

    let jar = issue_session(&state, jar, &headers, &user).await?;
    Ok((jar, Json(ApiResponse::ok(user))))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Json(req): Json<LoginRequest>,
) -> ApiResult<(CookieJar, Json<ApiResponse<User>>)> {
    check(&req)?;

    let user = state
        .account_service
        .authenticate(&req.email, &req.password)
        .await?;

    let jar = issue_session(&state, jar, &headers, &user).await?;
    Ok((jar, Json(ApiResponse::ok(user))))
}

/// POST /api/auth/logout
///
/// Clears both scheme cookies unconditionally, so a scheme change never
/// strands an old session cookie on the client.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<(CookieJar, Json<ApiResponse<MessageResponse>>)> {
    state.token_sessions.destroy(&jar).await;

    let jar = jar
        .remove(state.legacy_sessions.removal())
        .remove(state.token_sessions.removal());

    Ok((jar, Json(ApiResponse::ok(MessageResponse::new("Logged out")))))
}

/// GET /api/auth/me
pub async fn me(current: CurrentUser) -> ApiResult<Json<ApiResponse<SessionUser>>> {
    let user = gate::require_user(current.0)?;
    Ok(Json(ApiResponse::ok(user)))
}

/// Issue the session cookie for a fresh login under the active scheme.
async fn issue_session(
    state: &AppState,
    jar: CookieJar,
    headers: &HeaderMap,
    user: &User,
) -> Result<CookieJar, AppError> {
    let jar = match state.session_resolver.scheme() {
        SessionScheme::Legacy => jar.add(state.legacy_sessions.issue(user.id)),
        SessionScheme::Token => {
            let user_agent = headers
                .get("user-agent")
                .and_then(|v| v.to_str().ok())
                .map(String::from);
            let ip_address = headers
                .get("x-forwarded-for")
                .and_then(|v| v.to_str().ok())
                .map(String::from);

            let (_, cookie) = state
                .token_sessions
                .create(user.id, user_agent, ip_address)
                .await?;
            jar.add(cookie)
        }
    };
    Ok(jar)
}
