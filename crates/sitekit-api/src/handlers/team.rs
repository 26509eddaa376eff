//! Team member handlers: public listing and admin CRUD.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use sitekit_entity::team::{CreateTeamMember, TeamMember, UpdateTeamMember};

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::AdminUser;
use crate::state::AppState;

/// GET /api/team
pub async fn list_public(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<TeamMember>>>> {
    let members = state.team_service.list_public().await?;
    Ok(Json(ApiResponse::ok(members)))
}

/// GET /api/admin/team
pub async fn list_admin(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<ApiResponse<Vec<TeamMember>>>> {
    let members = state.team_service.list_admin().await?;
    Ok(Json(ApiResponse::ok(members)))
}

/// POST /api/admin/team
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(req): Json<CreateTeamMember>,
) -> ApiResult<Json<ApiResponse<TeamMember>>> {
    let member = state.team_service.create(req).await?;
    Ok(Json(ApiResponse::ok(member)))
}

/// PATCH /api/admin/team/{id}
pub async fn update(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTeamMember>,
) -> ApiResult<Json<ApiResponse<TeamMember>>> {
    let member = state.team_service.update(id, req).await?;
    Ok(Json(ApiResponse::ok(member)))
}

/// DELETE /api/admin/team/{id}
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.team_service.delete(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Team member deleted",
    ))))
}
