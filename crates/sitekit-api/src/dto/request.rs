//! Request DTOs with validation.
//!
//! Entity `Create*`/`Update*` payloads are accepted directly where the
//! wire shape matches the domain shape; the DTOs here cover auth,
//! registration, and status flows whose shapes differ.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Email address.
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    /// Display name.
    pub display_name: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Public course registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterCourseRequest {
    /// The course being registered for.
    pub course_id: Uuid,
    /// Applicant name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Applicant email.
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Free-form message.
    pub message: Option<String>,
}

/// Registration status transition (admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRegistrationStatusRequest {
    /// Target status: pending, approved, or rejected.
    pub status: String,
    /// Stamp the payment verification timestamp.
    #[serde(default)]
    pub verify_payment: bool,
}

/// Submission status transition (admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSubmissionStatusRequest {
    /// Target status: new, reviewed, or archived.
    pub status: String,
}

/// Create user request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Email address.
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    /// Display name.
    pub display_name: Option<String>,
    /// Role: user or admin.
    pub role: String,
}

/// Role change request (admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeRoleRequest {
    /// Target role: user or admin.
    pub role: String,
}

/// Password reset request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    /// New password.
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Generic revalidation request (admin): any tag, verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RevalidateRequest {
    /// Cache tag to invalidate.
    #[validate(length(min = 1, message = "tag is required"))]
    pub tag: String,
}
