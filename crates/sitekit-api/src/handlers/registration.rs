//! Course registration handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use sitekit_core::types::pagination::PageResponse;
use sitekit_entity::registration::{
    CourseRegistration, CreateCourseRegistration, RegistrationStatus,
};

use crate::dto::request::{RegisterCourseRequest, UpdateRegistrationStatusRequest};
use crate::dto::response::{ApiResponse, RegistrationAccepted};
use crate::error::ApiResult;
use crate::extractors::{AdminUser, CurrentUser, PaginationParams};
use crate::handlers::check;
use crate::state::AppState;

/// POST /api/courses/register
///
/// Open to anonymous callers; a resolved session attaches its user id.
pub async fn register(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(req): Json<RegisterCourseRequest>,
) -> ApiResult<Json<RegistrationAccepted>> {
    check(&req)?;

    let registration = state
        .registration_service
        .register(CreateCourseRegistration {
            course_id: req.course_id,
            user_id: current.0.map(|u| u.id),
            name: req.name,
            email: req.email,
            phone: req.phone,
            message: req.message,
        })
        .await?;

    Ok(Json(RegistrationAccepted {
        success: true,
        registration_id: registration.id,
    }))
}

/// Query filter for the admin registration listing.
#[derive(Debug, Deserialize)]
pub struct RegistrationFilter {
    /// Restrict to one status.
    pub status: Option<String>,
}

/// GET /api/admin/registrations
pub async fn list_admin(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(params): Query<PaginationParams>,
    Query(filter): Query<RegistrationFilter>,
) -> ApiResult<Json<ApiResponse<PageResponse<CourseRegistration>>>> {
    let status = filter
        .status
        .map(|s| s.parse::<RegistrationStatus>())
        .transpose()?;

    let page = state
        .registration_service
        .list_admin(status, &params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// PATCH /api/admin/registrations/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateRegistrationStatusRequest>,
) -> ApiResult<Json<ApiResponse<CourseRegistration>>> {
    let status = req.status.parse::<RegistrationStatus>()?;

    let registration = state
        .registration_service
        .update_status(id, status, req.verify_payment)
        .await?;
    Ok(Json(ApiResponse::ok(registration)))
}
