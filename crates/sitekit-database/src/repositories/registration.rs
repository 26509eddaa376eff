//! Course registration repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use sitekit_core::error::{AppError, ErrorKind};
use sitekit_core::result::AppResult;
use sitekit_core::types::pagination::{PageRequest, PageResponse};
use sitekit_entity::registration::{
    CourseRegistration, CreateCourseRegistration, RegistrationStatus,
};

/// Repository for course registration operations.
#[derive(Debug, Clone)]
pub struct RegistrationRepository {
    pool: PgPool,
}

impl RegistrationRepository {
    /// Create a new registration repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List registrations newest first, optionally filtered by status (admin view).
    pub async fn list(
        &self,
        status: Option<RegistrationStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<CourseRegistration>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM course_registrations WHERE ($1::registration_status IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count registrations", e)
        })?;

        let rows = sqlx::query_as::<_, CourseRegistration>(
            "SELECT * FROM course_registrations \
             WHERE ($1::registration_status IS NULL OR status = $1) \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(status)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list registrations", e)
        })?;

        Ok(PageResponse::new(rows, page, total as u64))
    }

    /// Create a new registration in `pending` status.
    pub async fn create(&self, data: &CreateCourseRegistration) -> AppResult<CourseRegistration> {
        sqlx::query_as::<_, CourseRegistration>(
            "INSERT INTO course_registrations \
             (course_id, user_id, name, email, phone, message) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(data.course_id)
        .bind(data.user_id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("course_registrations_course_id_fkey") =>
            {
                AppError::validation("Unknown course_id")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create registration", e),
        })
    }

    /// Transition a registration's status, optionally stamping payment
    /// verification. No other column is touched.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: RegistrationStatus,
        payment_verified_at: Option<DateTime<Utc>>,
    ) -> AppResult<Option<CourseRegistration>> {
        sqlx::query_as::<_, CourseRegistration>(
            "UPDATE course_registrations SET \
             status = $2, \
             payment_verified_at = COALESCE($3, payment_verified_at), \
             updated_at = now() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(payment_verified_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update registration", e)
        })
    }
}
