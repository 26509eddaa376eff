//! Course repository implementation.

use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use sitekit_core::error::{AppError, ErrorKind};
use sitekit_core::result::AppResult;
use sitekit_core::types::pagination::{PageRequest, PageResponse};
use sitekit_entity::course::{Course, CreateCourse};

/// Repository for course CRUD and query operations.
#[derive(Debug, Clone)]
pub struct CourseRepository {
    pool: PgPool,
}

impl CourseRepository {
    /// Create a new course repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a course by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Course>> {
        sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find course", e))
    }

    /// Find a publicly visible course by slug.
    pub async fn find_active_by_slug(&self, slug: &str) -> AppResult<Option<Course>> {
        sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE slug = $1 AND is_active = TRUE")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find course by slug", e)
            })
    }

    /// List publicly visible courses in display order.
    pub async fn list_active(&self) -> AppResult<Vec<Course>> {
        sqlx::query_as::<_, Course>(
            "SELECT * FROM courses WHERE is_active = TRUE \
             ORDER BY sort_order ASC, created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list courses", e))
    }

    /// List all courses with pagination (admin view, unfiltered).
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Course>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM courses")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count courses", e)
            })?;

        let courses = sqlx::query_as::<_, Course>(
            "SELECT * FROM courses ORDER BY sort_order ASC, created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list courses", e))?;

        Ok(PageResponse::new(courses, page, total as u64))
    }

    /// Create a new course.
    pub async fn create(&self, data: &CreateCourse) -> AppResult<Course> {
        sqlx::query_as::<_, Course>(
            "INSERT INTO courses \
             (slug, title, summary, description, price_cents, features, sort_order, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(&data.slug)
        .bind(&data.title)
        .bind(&data.summary)
        .bind(&data.description)
        .bind(data.price_cents)
        .bind(data.features.clone().map(Json))
        .bind(data.sort_order)
        .bind(data.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("courses_slug_key") => {
                AppError::conflict(format!("Slug '{}' already exists", data.slug))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create course", e),
        })
    }

    /// Write back a full course row.
    pub async fn update(&self, course: &Course) -> AppResult<Course> {
        sqlx::query_as::<_, Course>(
            "UPDATE courses SET \
             slug = $2, title = $3, summary = $4, description = $5, price_cents = $6, \
             features = $7, sort_order = $8, is_active = $9, updated_at = now() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(course.id)
        .bind(&course.slug)
        .bind(&course.title)
        .bind(&course.summary)
        .bind(&course.description)
        .bind(course.price_cents)
        .bind(&course.features)
        .bind(course.sort_order)
        .bind(course.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("courses_slug_key") => {
                AppError::conflict(format!("Slug '{}' already exists", course.slug))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update course", e),
        })
    }

    /// Delete a course. Returns `true` if a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete course", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
