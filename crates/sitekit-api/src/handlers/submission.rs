//! Project brief submission handlers.

use axum::Json;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use serde::Deserialize;
use uuid::Uuid;

use sitekit_core::error::AppError;
use sitekit_core::types::pagination::PageResponse;
use sitekit_entity::submission::{ProjectSubmission, SubmissionStatus};
use sitekit_service::submission::SubmissionIntake;

use crate::dto::request::UpdateSubmissionStatusRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{AdminUser, PaginationParams};
use crate::state::AppState;

/// POST /api/submissions
///
/// Multipart intake: text fields `name`, `email`, `company`, `brief`,
/// plus an optional `attachment` file part.
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<ApiResponse<ProjectSubmission>>> {
    let mut name = None;
    let mut email = None;
    let mut company = None;
    let mut brief = None;
    let mut attachment = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Malformed multipart body: {e}")))?
    {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("name") => name = Some(read_text(field).await?),
            Some("email") => email = Some(read_text(field).await?),
            Some("company") => company = Some(read_text(field).await?),
            Some("brief") => brief = Some(read_text(field).await?),
            Some("attachment") => {
                let file_name = field
                    .file_name()
                    .map(str::to_string)
                    .unwrap_or_else(|| "attachment".to_string());
                let data = field.bytes().await.map_err(|e| {
                    AppError::validation(format!("Failed to read attachment: {e}"))
                })?;
                if !data.is_empty() {
                    attachment = Some((file_name, data.to_vec()));
                }
            }
            _ => {}
        }
    }

    let submission = state
        .submission_service
        .submit(SubmissionIntake {
            name: name.ok_or_else(|| AppError::validation("name is required"))?,
            email: email.ok_or_else(|| AppError::validation("email is required"))?,
            company,
            brief: brief.ok_or_else(|| AppError::validation("brief is required"))?,
            attachment,
        })
        .await?;

    Ok(Json(ApiResponse::ok(submission)))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::validation(format!("Malformed multipart field: {e}")))
}

/// Query filter for the admin submission listing.
#[derive(Debug, Deserialize)]
pub struct SubmissionFilter {
    /// Restrict to one status.
    pub status: Option<String>,
}

/// GET /api/admin/submissions
pub async fn list_admin(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(params): Query<PaginationParams>,
    Query(filter): Query<SubmissionFilter>,
) -> ApiResult<Json<ApiResponse<PageResponse<ProjectSubmission>>>> {
    let status = filter
        .status
        .map(|s| s.parse::<SubmissionStatus>())
        .transpose()?;

    let page = state
        .submission_service
        .list_admin(status, &params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/admin/submissions/{id}
pub async fn get_admin(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<ProjectSubmission>>> {
    let submission = state.submission_service.get_admin(id).await?;
    Ok(Json(ApiResponse::ok(submission)))
}

/// PATCH /api/admin/submissions/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateSubmissionStatusRequest>,
) -> ApiResult<Json<ApiResponse<ProjectSubmission>>> {
    let status = req.status.parse::<SubmissionStatus>()?;
    let submission = state.submission_service.update_status(id, status).await?;
    Ok(Json(ApiResponse::ok(submission)))
}

/// GET /api/admin/submissions/{id}/attachment
pub async fn download_attachment(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let (path, original_name) = state.submission_service.attachment(id).await?;

    let data = tokio::fs::read(&path).await.map_err(|e| {
        AppError::with_source(
            sitekit_core::error::ErrorKind::Storage,
            "Failed to read attachment",
            e,
        )
    })?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                "application/octet-stream".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{original_name}\""),
            ),
        ],
        data,
    ))
}
