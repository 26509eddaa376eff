//! Admin user management handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use sitekit_core::types::pagination::PageResponse;
use sitekit_entity::user::{User, UserRole};

use crate::dto::request::{ChangeRoleRequest, CreateUserRequest, ResetPasswordRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AdminUser, PaginationParams};
use crate::handlers::check;
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<User>>>> {
    let page = state.user_service.list(&params.into_page_request()).await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// POST /api/admin/users
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<Json<ApiResponse<User>>> {
    check(&req)?;
    let role = req.role.parse::<UserRole>()?;

    let user = state
        .user_service
        .provision(&req.email, &req.password, req.display_name, role)
        .await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// PUT /api/admin/users/{id}/role
pub async fn change_role(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangeRoleRequest>,
) -> ApiResult<Json<ApiResponse<User>>> {
    let role = req.role.parse::<UserRole>()?;
    let user = state.user_service.change_role(id, role).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// PUT /api/admin/users/{id}/password
pub async fn reset_password(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ResetPasswordRequest>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    check(&req)?;
    state.user_service.reset_password(id, &req.password).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Password reset"))))
}
