//! Project brief submission entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::SubmissionStatus;

/// A project brief submitted from the public site, optionally with an
/// uploaded attachment.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectSubmission {
    /// Unique submission identifier.
    pub id: Uuid,
    /// Submitter name.
    pub name: String,
    /// Submitter email.
    pub email: String,
    /// Submitter company.
    pub company: Option<String>,
    /// The project brief text.
    pub brief: String,
    /// Stored attachment path, relative to the upload root.
    pub attachment_path: Option<String>,
    /// Original filename of the attachment as uploaded.
    pub attachment_name: Option<String>,
    /// Triage status.
    pub status: SubmissionStatus,
    /// When the brief was submitted.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProjectSubmission {
    /// Submitter name.
    pub name: String,
    /// Submitter email.
    pub email: String,
    /// Company.
    pub company: Option<String>,
    /// Brief text.
    pub brief: String,
    /// Stored attachment path.
    pub attachment_path: Option<String>,
    /// Original attachment filename.
    pub attachment_name: Option<String>,
}
