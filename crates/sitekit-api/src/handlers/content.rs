//! Content section handlers: public section reads and admin CRUD for
//! lists and cards.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use sitekit_entity::content::{
    ContentCard, ContentList, CreateContentCard, CreateContentList, UpdateContentCard,
    UpdateContentList,
};
use sitekit_service::content::ContentSection;

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::AdminUser;
use crate::state::AppState;

/// GET /api/content/{slug}
pub async fn get_section(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<ApiResponse<ContentSection>>> {
    let section = state.content_service.get_section(&slug).await?;
    Ok(Json(ApiResponse::ok(section)))
}

// ── Lists ──────────────────────────────────────────────────

/// GET /api/admin/content/lists
pub async fn list_lists(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<ApiResponse<Vec<ContentList>>>> {
    let lists = state.content_service.list_lists().await?;
    Ok(Json(ApiResponse::ok(lists)))
}

/// POST /api/admin/content/lists
pub async fn create_list(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(req): Json<CreateContentList>,
) -> ApiResult<Json<ApiResponse<ContentList>>> {
    let list = state.content_service.create_list(req).await?;
    Ok(Json(ApiResponse::ok(list)))
}

/// PATCH /api/admin/content/lists/{id}
pub async fn update_list(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateContentList>,
) -> ApiResult<Json<ApiResponse<ContentList>>> {
    let list = state.content_service.update_list(id, req).await?;
    Ok(Json(ApiResponse::ok(list)))
}

/// DELETE /api/admin/content/lists/{id}
pub async fn delete_list(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.content_service.delete_list(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Section deleted",
    ))))
}

// ── Cards ──────────────────────────────────────────────────

/// GET /api/admin/content/lists/{id}/cards
pub async fn list_cards(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Vec<ContentCard>>>> {
    let cards = state.content_service.list_cards(id).await?;
    Ok(Json(ApiResponse::ok(cards)))
}

/// POST /api/admin/content/cards
pub async fn create_card(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(req): Json<CreateContentCard>,
) -> ApiResult<Json<ApiResponse<ContentCard>>> {
    let card = state.content_service.create_card(req).await?;
    Ok(Json(ApiResponse::ok(card)))
}

/// PATCH /api/admin/content/cards/{id}
pub async fn update_card(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateContentCard>,
) -> ApiResult<Json<ApiResponse<ContentCard>>> {
    let card = state.content_service.update_card(id, req).await?;
    Ok(Json(ApiResponse::ok(card)))
}

/// DELETE /api/admin/content/cards/{id}
pub async fn delete_card(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.content_service.delete_card(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Card deleted"))))
}
