//! Course registration entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::RegistrationStatus;

/// A request to join a course, submitted from the public site.
///
/// Registrations may be submitted anonymously, in which case `user_id`
/// stays `None`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CourseRegistration {
    /// Unique registration identifier.
    pub id: Uuid,
    /// The course being registered for.
    pub course_id: Uuid,
    /// The logged-in user who submitted, if any.
    pub user_id: Option<Uuid>,
    /// Applicant name.
    pub name: String,
    /// Applicant email.
    pub email: String,
    /// Applicant phone number.
    pub phone: Option<String>,
    /// Free-form message from the applicant.
    pub message: Option<String>,
    /// Review status.
    pub status: RegistrationStatus,
    /// When payment was verified by an admin, if it was.
    pub payment_verified_at: Option<DateTime<Utc>>,
    /// When the registration was submitted.
    pub created_at: DateTime<Utc>,
    /// When the registration was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a course registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCourseRegistration {
    /// The course being registered for.
    pub course_id: Uuid,
    /// Submitting user, if a session was resolved.
    pub user_id: Option<Uuid>,
    /// Applicant name.
    pub name: String,
    /// Applicant email.
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Free-form message.
    pub message: Option<String>,
}
