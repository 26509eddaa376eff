//! Course registration service.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use sitekit_core::error::AppError;
use sitekit_core::result::AppResult;
use sitekit_core::types::pagination::{PageRequest, PageResponse};
use sitekit_database::repositories::registration::RegistrationRepository;
use sitekit_entity::registration::{
    CourseRegistration, CreateCourseRegistration, RegistrationStatus,
};

/// Handles course registration intake and admin review.
#[derive(Debug, Clone)]
pub struct RegistrationService {
    registrations: Arc<RegistrationRepository>,
}

impl RegistrationService {
    /// Creates a new registration service.
    pub fn new(registrations: Arc<RegistrationRepository>) -> Self {
        Self { registrations }
    }

    /// Accepts a registration from the public site.
    ///
    /// No session is required; when one was resolved, the user id is
    /// attached, otherwise it stays `None`. New registrations always
    /// start in `pending`.
    pub async fn register(&self, data: CreateCourseRegistration) -> AppResult<CourseRegistration> {
        if data.name.trim().is_empty() {
            return Err(AppError::validation("name is required"));
        }
        if data.email.trim().is_empty() {
            return Err(AppError::validation("email is required"));
        }
        if !data.email.contains('@') {
            return Err(AppError::validation("Invalid email format"));
        }

        let registration = self.registrations.create(&data).await?;

        info!(
            registration_id = %registration.id,
            course_id = %registration.course_id,
            anonymous = registration.user_id.is_none(),
            "Course registration received"
        );
        Ok(registration)
    }

    /// Lists registrations, optionally filtered by status (admin view).
    pub async fn list_admin(
        &self,
        status: Option<RegistrationStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<CourseRegistration>> {
        self.registrations.list(status, page).await
    }

    /// Transitions a registration's status.
    ///
    /// Only `status` changes; when `verify_payment` is set the payment
    /// verification timestamp is stamped with the current time.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: RegistrationStatus,
        verify_payment: bool,
    ) -> AppResult<CourseRegistration> {
        let verified_at = verify_payment.then(Utc::now);

        let registration = self
            .registrations
            .update_status(id, status, verified_at)
            .await?
            .ok_or_else(|| AppError::not_found("Registration not found"))?;

        info!(registration_id = %id, status = %status, "Registration status updated");
        Ok(registration)
    }
}
