//! Maps domain `AppError` to HTTP responses.
//!
//! Handlers return [`ApiResult`]; the `?` operator converts any
//! [`AppError`] through the [`ApiError`] wrapper, which renders the
//! `{error, details?}` body. `details` is echoed only outside
//! production.

use std::sync::OnceLock;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use sitekit_core::error::{AppError, ErrorKind};

static EXPOSE_DETAILS: OnceLock<bool> = OnceLock::new();

/// Configure whether error details are echoed to clients. Called once at
/// startup; defaults to hidden.
pub fn expose_error_details(expose: bool) {
    let _ = EXPOSE_DETAILS.set(expose);
}

fn details_exposed() -> bool {
    EXPOSE_DETAILS.get().copied().unwrap_or(false)
}

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Diagnostic details, present outside production only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Response-side wrapper for [`AppError`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

/// Result alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = match err.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
            ErrorKind::Authorization => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Internal
            | ErrorKind::Database
            | ErrorKind::Cache
            | ErrorKind::Storage
            | ErrorKind::Configuration
            | ErrorKind::Serialization => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(kind = %err.kind, error = %err.message, "Request failed");
        }

        // Server-side failures stay generic for clients; the message is
        // in the log. Client errors carry their message verbatim.
        let message = if status.is_server_error() {
            "Internal server error".to_string()
        } else {
            err.message.clone()
        };

        let details = if details_exposed() {
            err.detail_chain().or_else(|| {
                status
                    .is_server_error()
                    .then(|| err.message.clone())
            })
        } else {
            None
        };

        let body = ApiErrorResponse {
            error: message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn test_kind_to_status_mapping() {
        assert_eq!(
            status_of(AppError::validation("name is required")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::unauthenticated("no session")),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AppError::forbidden("admin only")),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(AppError::not_found("missing")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AppError::conflict("duplicate")),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(AppError::database("boom")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
