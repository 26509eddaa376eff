//! Course schedule repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use sitekit_core::error::{AppError, ErrorKind};
use sitekit_core::result::AppResult;
use sitekit_entity::course::{CourseSchedule, CreateCourseSchedule};

/// Repository for course schedule operations.
#[derive(Debug, Clone)]
pub struct ScheduleRepository {
    pool: PgPool,
}

impl ScheduleRepository {
    /// Create a new schedule repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a schedule by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<CourseSchedule>> {
        sqlx::query_as::<_, CourseSchedule>("SELECT * FROM course_schedules WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find schedule", e))
    }

    /// List publicly visible runs of a course, soonest first.
    pub async fn list_active_by_course(&self, course_id: Uuid) -> AppResult<Vec<CourseSchedule>> {
        sqlx::query_as::<_, CourseSchedule>(
            "SELECT * FROM course_schedules \
             WHERE course_id = $1 AND is_active = TRUE \
             ORDER BY sort_order ASC, starts_at ASC",
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list schedules", e))
    }

    /// List every run of a course (admin view, unfiltered).
    pub async fn list_by_course(&self, course_id: Uuid) -> AppResult<Vec<CourseSchedule>> {
        sqlx::query_as::<_, CourseSchedule>(
            "SELECT * FROM course_schedules WHERE course_id = $1 \
             ORDER BY sort_order ASC, starts_at ASC",
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list schedules", e))
    }

    /// Create a new schedule.
    pub async fn create(&self, data: &CreateCourseSchedule) -> AppResult<CourseSchedule> {
        sqlx::query_as::<_, CourseSchedule>(
            "INSERT INTO course_schedules \
             (course_id, starts_at, ends_at, location, capacity, sort_order, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(data.course_id)
        .bind(data.starts_at)
        .bind(data.ends_at)
        .bind(&data.location)
        .bind(data.capacity)
        .bind(data.sort_order)
        .bind(data.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("course_schedules_course_id_fkey") =>
            {
                AppError::validation("Unknown course_id")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create schedule", e),
        })
    }

    /// Write back a full schedule row.
    pub async fn update(&self, schedule: &CourseSchedule) -> AppResult<CourseSchedule> {
        sqlx::query_as::<_, CourseSchedule>(
            "UPDATE course_schedules SET \
             starts_at = $2, ends_at = $3, location = $4, capacity = $5, \
             sort_order = $6, is_active = $7, updated_at = now() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(schedule.id)
        .bind(schedule.starts_at)
        .bind(schedule.ends_at)
        .bind(&schedule.location)
        .bind(schedule.capacity)
        .bind(schedule.sort_order)
        .bind(schedule.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update schedule", e))
    }

    /// Delete a schedule. Returns `true` if a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM course_schedules WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete schedule", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
