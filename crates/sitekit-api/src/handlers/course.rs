//! Course catalog handlers: public reads and admin CRUD for courses and
//! schedules.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use sitekit_core::types::pagination::PageResponse;
use sitekit_entity::course::{
    Course, CourseSchedule, CreateCourse, CreateCourseSchedule, UpdateCourse, UpdateCourseSchedule,
};
use sitekit_service::catalog::CourseDetail;

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AdminUser, PaginationParams};
use crate::state::AppState;

/// GET /api/courses
pub async fn list_public(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<Course>>>> {
    let courses = state.catalog_service.list_public().await?;
    Ok(Json(ApiResponse::ok(courses)))
}

/// GET /api/courses/{slug}
pub async fn get_public(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<ApiResponse<CourseDetail>>> {
    let detail = state.catalog_service.get_public(&slug).await?;
    Ok(Json(ApiResponse::ok(detail)))
}

/// GET /api/courses/{id}/schedules
pub async fn list_public_schedules(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Vec<CourseSchedule>>>> {
    let schedules = state.catalog_service.list_public_schedules(id).await?;
    Ok(Json(ApiResponse::ok(schedules)))
}

// ── Admin: courses ─────────────────────────────────────────

/// GET /api/admin/courses
pub async fn list_admin(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<Course>>>> {
    let page = state
        .catalog_service
        .list_admin(&params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// POST /api/admin/courses
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(req): Json<CreateCourse>,
) -> ApiResult<Json<ApiResponse<Course>>> {
    let course = state.catalog_service.create_course(req).await?;
    Ok(Json(ApiResponse::ok(course)))
}

/// PATCH /api/admin/courses/{id}
pub async fn update(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCourse>,
) -> ApiResult<Json<ApiResponse<Course>>> {
    let course = state.catalog_service.update_course(id, req).await?;
    Ok(Json(ApiResponse::ok(course)))
}

/// DELETE /api/admin/courses/{id}
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.catalog_service.delete_course(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Course deleted"))))
}

// ── Admin: schedules ───────────────────────────────────────

/// GET /api/admin/courses/{id}/schedules
pub async fn list_admin_schedules(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Vec<CourseSchedule>>>> {
    let schedules = state.catalog_service.list_admin_schedules(id).await?;
    Ok(Json(ApiResponse::ok(schedules)))
}

/// POST /api/admin/schedules
pub async fn create_schedule(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(req): Json<CreateCourseSchedule>,
) -> ApiResult<Json<ApiResponse<CourseSchedule>>> {
    let schedule = state.catalog_service.create_schedule(req).await?;
    Ok(Json(ApiResponse::ok(schedule)))
}

/// PATCH /api/admin/schedules/{id}
pub async fn update_schedule(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCourseSchedule>,
) -> ApiResult<Json<ApiResponse<CourseSchedule>>> {
    let schedule = state.catalog_service.update_schedule(id, req).await?;
    Ok(Json(ApiResponse::ok(schedule)))
}

/// DELETE /api/admin/schedules/{id}
pub async fn delete_schedule(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.catalog_service.delete_schedule(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Schedule deleted",
    ))))
}
