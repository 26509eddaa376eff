//! Blog handlers: public reads and admin CRUD.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use sitekit_core::types::pagination::PageResponse;
use sitekit_entity::blog::{BlogPost, CreateBlogPost, UpdateBlogPost};

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AdminUser, PaginationParams};
use crate::state::AppState;

/// GET /api/blog
pub async fn list_public(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<BlogPost>>>> {
    let posts = state.blog_service.list_public().await?;
    Ok(Json(ApiResponse::ok(posts)))
}

/// GET /api/blog/{slug}
pub async fn get_public(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<ApiResponse<BlogPost>>> {
    let post = state.blog_service.get_public(&slug).await?;
    Ok(Json(ApiResponse::ok(post)))
}

/// GET /api/admin/blog
pub async fn list_admin(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<BlogPost>>>> {
    let page = state
        .blog_service
        .list_admin(&params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// POST /api/admin/blog
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(req): Json<CreateBlogPost>,
) -> ApiResult<Json<ApiResponse<BlogPost>>> {
    let post = state.blog_service.create(req).await?;
    Ok(Json(ApiResponse::ok(post)))
}

/// PATCH /api/admin/blog/{id}
pub async fn update(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateBlogPost>,
) -> ApiResult<Json<ApiResponse<BlogPost>>> {
    let post = state.blog_service.update(id, req).await?;
    Ok(Json(ApiResponse::ok(post)))
}

/// DELETE /api/admin/blog/{id}
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.blog_service.delete(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Post deleted"))))
}
