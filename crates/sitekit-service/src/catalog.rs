//! Catalog service: courses and their schedules.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use tracing::{info, warn};
use uuid::Uuid;

use sitekit_cache::{CacheManager, tags};
use sitekit_core::error::AppError;
use sitekit_core::result::AppResult;
use sitekit_core::traits::cache::CacheProvider;
use sitekit_core::traits::invalidator::CacheInvalidator;
use sitekit_core::types::pagination::{PageRequest, PageResponse};
use sitekit_database::repositories::course::CourseRepository;
use sitekit_database::repositories::schedule::ScheduleRepository;
use sitekit_entity::course::{
    Course, CourseSchedule, CreateCourse, CreateCourseSchedule, UpdateCourse, UpdateCourseSchedule,
};

/// A course as rendered publicly: the course plus its visible runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDetail {
    /// The course.
    pub course: Course,
    /// Upcoming visible runs in display order.
    pub schedules: Vec<CourseSchedule>,
}

/// Handles catalog reads and mutations.
#[derive(Debug, Clone)]
pub struct CatalogService {
    courses: Arc<CourseRepository>,
    schedules: Arc<ScheduleRepository>,
    cache: Arc<CacheManager>,
    invalidator: Arc<dyn CacheInvalidator>,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(
        courses: Arc<CourseRepository>,
        schedules: Arc<ScheduleRepository>,
        cache: Arc<CacheManager>,
        invalidator: Arc<dyn CacheInvalidator>,
    ) -> Self {
        Self {
            courses,
            schedules,
            cache,
            invalidator,
        }
    }

    /// Lists publicly visible courses, read-through cached.
    pub async fn list_public(&self) -> AppResult<Vec<Course>> {
        let key = tags::collection_key(tags::COURSES);
        if let Ok(Some(cached)) = self.cache.get_json::<Vec<Course>>(&key).await {
            return Ok(cached);
        }

        let courses = self.courses.list_active().await?;
        if let Err(e) = self
            .cache
            .set_json(&key, &courses, self.cache.default_ttl())
            .await
        {
            warn!(error = %e, "Failed to cache course listing");
        }
        Ok(courses)
    }

    /// Fetches a publicly visible course with its runs, read-through cached.
    pub async fn get_public(&self, slug: &str) -> AppResult<CourseDetail> {
        let key = tags::entry_key(tags::COURSES, slug);
        if let Ok(Some(cached)) = self.cache.get_json::<CourseDetail>(&key).await {
            return Ok(cached);
        }

        let course = self
            .courses
            .find_active_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Course not found"))?;
        let schedules = self.schedules.list_active_by_course(course.id).await?;
        let detail = CourseDetail { course, schedules };

        if let Err(e) = self
            .cache
            .set_json(&key, &detail, self.cache.default_ttl())
            .await
        {
            warn!(error = %e, slug, "Failed to cache course detail");
        }
        Ok(detail)
    }

    /// Lists visible runs of a publicly visible course.
    pub async fn list_public_schedules(&self, course_id: Uuid) -> AppResult<Vec<CourseSchedule>> {
        self.schedules.list_active_by_course(course_id).await
    }

    // ── Admin: courses ─────────────────────────────────────

    /// Lists all courses (admin view, unfiltered).
    pub async fn list_admin(&self, page: &PageRequest) -> AppResult<PageResponse<Course>> {
        self.courses.list(page).await
    }

    /// Creates a course and invalidates the catalog tag.
    pub async fn create_course(&self, data: CreateCourse) -> AppResult<Course> {
        if data.slug.trim().is_empty() {
            return Err(AppError::validation("slug is required"));
        }
        if data.title.trim().is_empty() {
            return Err(AppError::validation("title is required"));
        }

        let course = self.courses.create(&data).await?;
        self.invalidator.invalidate(tags::COURSES).await;

        info!(course_id = %course.id, slug = %course.slug, "Course created");
        Ok(course)
    }

    /// Applies a partial update to a course and invalidates the catalog tag.
    pub async fn update_course(&self, id: Uuid, patch: UpdateCourse) -> AppResult<Course> {
        let mut course = self
            .courses
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Course not found"))?;

        if let Some(slug) = patch.slug {
            course.slug = slug;
        }
        if let Some(title) = patch.title {
            if title.trim().is_empty() {
                return Err(AppError::validation("title cannot be empty"));
            }
            course.title = title;
        }
        if let Some(summary) = patch.summary {
            course.summary = Some(summary);
        }
        if let Some(description) = patch.description {
            course.description = Some(description);
        }
        if let Some(price_cents) = patch.price_cents {
            course.price_cents = price_cents;
        }
        if let Some(features) = patch.features {
            course.features = Some(Json(features));
        }
        if let Some(sort_order) = patch.sort_order {
            course.sort_order = sort_order;
        }
        if let Some(is_active) = patch.is_active {
            course.is_active = is_active;
        }

        let course = self.courses.update(&course).await?;
        self.invalidator.invalidate(tags::COURSES).await;
        Ok(course)
    }

    /// Deletes a course (schedules cascade) and invalidates the catalog tags.
    pub async fn delete_course(&self, id: Uuid) -> AppResult<()> {
        let removed = self.courses.delete(id).await?;
        if !removed {
            return Err(AppError::not_found("Course not found"));
        }
        self.invalidator
            .invalidate_many(&[tags::COURSES, tags::COURSE_SCHEDULES])
            .await;
        Ok(())
    }

    // ── Admin: schedules ───────────────────────────────────

    /// Lists every run of a course (admin view, unfiltered).
    pub async fn list_admin_schedules(&self, course_id: Uuid) -> AppResult<Vec<CourseSchedule>> {
        self.schedules.list_by_course(course_id).await
    }

    /// Creates a schedule and invalidates the catalog tags.
    ///
    /// Course detail responses embed schedules, so `courses` is flushed
    /// along with `course-schedules`.
    pub async fn create_schedule(&self, data: CreateCourseSchedule) -> AppResult<CourseSchedule> {
        let schedule = self.schedules.create(&data).await?;
        self.invalidator
            .invalidate_many(&[tags::COURSE_SCHEDULES, tags::COURSES])
            .await;

        info!(schedule_id = %schedule.id, course_id = %schedule.course_id, "Schedule created");
        Ok(schedule)
    }

    /// Applies a partial update to a schedule and invalidates the catalog tags.
    pub async fn update_schedule(
        &self,
        id: Uuid,
        patch: UpdateCourseSchedule,
    ) -> AppResult<CourseSchedule> {
        let mut schedule = self
            .schedules
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Schedule not found"))?;

        if let Some(starts_at) = patch.starts_at {
            schedule.starts_at = starts_at;
        }
        if let Some(ends_at) = patch.ends_at {
            schedule.ends_at = Some(ends_at);
        }
        if let Some(location) = patch.location {
            schedule.location = Some(location);
        }
        if let Some(capacity) = patch.capacity {
            schedule.capacity = Some(capacity);
        }
        if let Some(sort_order) = patch.sort_order {
            schedule.sort_order = sort_order;
        }
        if let Some(is_active) = patch.is_active {
            schedule.is_active = is_active;
        }

        let schedule = self.schedules.update(&schedule).await?;
        self.invalidator
            .invalidate_many(&[tags::COURSE_SCHEDULES, tags::COURSES])
            .await;
        Ok(schedule)
    }

    /// Deletes a schedule and invalidates the catalog tags.
    pub async fn delete_schedule(&self, id: Uuid) -> AppResult<()> {
        let removed = self.schedules.delete(id).await?;
        if !removed {
            return Err(AppError::not_found("Schedule not found"));
        }
        self.invalidator
            .invalidate_many(&[tags::COURSE_SCHEDULES, tags::COURSES])
            .await;
        Ok(())
    }
}
