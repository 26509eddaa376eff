//! Generic cache revalidation endpoint.

use axum::Json;
use axum::extract::State;
use tracing::info;

use crate::dto::request::RevalidateRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::AdminUser;
use crate::handlers::check;
use crate::state::AppState;

/// POST /api/admin/revalidate
///
/// Invalidates the given tag verbatim. Useful after out-of-band data
/// changes (imports, manual SQL).
pub async fn revalidate(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(req): Json<RevalidateRequest>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    check(&req)?;

    state.invalidator.invalidate(&req.tag).await;
    info!(tag = %req.tag, admin = %admin.id, "Manual revalidation");

    Ok(Json(ApiResponse::ok(MessageResponse::new(format!(
        "Tag '{}' invalidated",
        req.tag
    )))))
}
