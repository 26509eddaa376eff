//! Course schedule entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A scheduled run of a course.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CourseSchedule {
    /// Unique schedule identifier.
    pub id: Uuid,
    /// The course this run belongs to.
    pub course_id: Uuid,
    /// When the run starts.
    pub starts_at: DateTime<Utc>,
    /// When the run ends.
    pub ends_at: Option<DateTime<Utc>>,
    /// Venue or "online".
    pub location: Option<String>,
    /// Maximum number of participants.
    pub capacity: Option<i32>,
    /// Sort key for listings.
    pub sort_order: i32,
    /// Whether the run is publicly visible.
    pub is_active: bool,
    /// When the schedule was created.
    pub created_at: DateTime<Utc>,
    /// When the schedule was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a course schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCourseSchedule {
    /// The course this run belongs to.
    pub course_id: Uuid,
    /// Start time.
    pub starts_at: DateTime<Utc>,
    /// End time.
    pub ends_at: Option<DateTime<Utc>>,
    /// Venue.
    pub location: Option<String>,
    /// Capacity.
    pub capacity: Option<i32>,
    /// Sort key.
    #[serde(default)]
    pub sort_order: i32,
    /// Public visibility.
    #[serde(default = "crate::default_true")]
    pub is_active: bool,
}

/// Partial update for a course schedule. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCourseSchedule {
    /// New start time.
    pub starts_at: Option<DateTime<Utc>>,
    /// New end time.
    pub ends_at: Option<DateTime<Utc>>,
    /// New venue.
    pub location: Option<String>,
    /// New capacity.
    pub capacity: Option<i32>,
    /// New sort key.
    pub sort_order: Option<i32>,
    /// New visibility.
    pub is_active: Option<bool>,
}
