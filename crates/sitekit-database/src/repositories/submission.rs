//! Project submission repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use sitekit_core::error::{AppError, ErrorKind};
use sitekit_core::result::AppResult;
use sitekit_core::types::pagination::{PageRequest, PageResponse};
use sitekit_entity::submission::{CreateProjectSubmission, ProjectSubmission, SubmissionStatus};

/// Repository for project brief submissions.
#[derive(Debug, Clone)]
pub struct SubmissionRepository {
    pool: PgPool,
}

impl SubmissionRepository {
    /// Create a new submission repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a submission by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ProjectSubmission>> {
        sqlx::query_as::<_, ProjectSubmission>("SELECT * FROM project_submissions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find submission", e)
            })
    }

    /// List submissions newest first, optionally filtered by status (admin view).
    pub async fn list(
        &self,
        status: Option<SubmissionStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ProjectSubmission>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM project_submissions WHERE ($1::submission_status IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count submissions", e)
        })?;

        let rows = sqlx::query_as::<_, ProjectSubmission>(
            "SELECT * FROM project_submissions \
             WHERE ($1::submission_status IS NULL OR status = $1) \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(status)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list submissions", e))?;

        Ok(PageResponse::new(rows, page, total as u64))
    }

    /// Create a new submission in `new` status.
    pub async fn create(&self, data: &CreateProjectSubmission) -> AppResult<ProjectSubmission> {
        sqlx::query_as::<_, ProjectSubmission>(
            "INSERT INTO project_submissions \
             (name, email, company, brief, attachment_path, attachment_name) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.company)
        .bind(&data.brief)
        .bind(&data.attachment_path)
        .bind(&data.attachment_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create submission", e))
    }

    /// Transition a submission's triage status.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: SubmissionStatus,
    ) -> AppResult<Option<ProjectSubmission>> {
        sqlx::query_as::<_, ProjectSubmission>(
            "UPDATE project_submissions SET status = $2, updated_at = now() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update submission", e))
    }
}
