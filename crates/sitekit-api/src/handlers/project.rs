//! Portfolio project handlers: public reads and admin CRUD.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use sitekit_core::types::pagination::PageResponse;
use sitekit_entity::project::{CreateProject, Project, UpdateProject};

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AdminUser, PaginationParams};
use crate::state::AppState;

/// GET /api/projects
pub async fn list_public(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<Project>>>> {
    let projects = state.portfolio_service.list_public().await?;
    Ok(Json(ApiResponse::ok(projects)))
}

/// GET /api/projects/{slug}
pub async fn get_public(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<ApiResponse<Project>>> {
    let project = state.portfolio_service.get_public(&slug).await?;
    Ok(Json(ApiResponse::ok(project)))
}

/// GET /api/admin/projects
pub async fn list_admin(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<Project>>>> {
    let page = state
        .portfolio_service
        .list_admin(&params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// POST /api/admin/projects
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(req): Json<CreateProject>,
) -> ApiResult<Json<ApiResponse<Project>>> {
    let project = state.portfolio_service.create(req).await?;
    Ok(Json(ApiResponse::ok(project)))
}

/// PATCH /api/admin/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProject>,
) -> ApiResult<Json<ApiResponse<Project>>> {
    let project = state.portfolio_service.update(id, req).await?;
    Ok(Json(ApiResponse::ok(project)))
}

/// DELETE /api/admin/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.portfolio_service.delete(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Project deleted",
    ))))
}
