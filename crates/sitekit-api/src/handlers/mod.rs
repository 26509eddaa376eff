//! HTTP handlers, one module per domain.

pub mod admin;
pub mod auth;
pub mod blog;
pub mod content;
pub mod course;
pub mod health;
pub mod project;
pub mod registration;
pub mod submission;
pub mod team;

use validator::Validate;

use sitekit_core::error::AppError;

use crate::error::ApiError;

/// Run DTO validation, mapping failures to a 400 naming the field.
pub(crate) fn check(req: &impl Validate) -> Result<(), ApiError> {
    req.validate()
        .map_err(|e| ApiError(AppError::validation(e.to_string())))
}
