//! Project brief submission service.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use sitekit_core::error::AppError;
use sitekit_core::result::AppResult;
use sitekit_core::types::pagination::{PageRequest, PageResponse};
use sitekit_database::repositories::submission::SubmissionRepository;
use sitekit_entity::submission::{CreateProjectSubmission, ProjectSubmission, SubmissionStatus};

use crate::upload::UploadStore;

/// An incoming brief before the attachment has been stored.
#[derive(Debug, Clone)]
pub struct SubmissionIntake {
    /// Submitter name.
    pub name: String,
    /// Submitter email.
    pub email: String,
    /// Company.
    pub company: Option<String>,
    /// Brief text.
    pub brief: String,
    /// Raw attachment, if one was uploaded.
    pub attachment: Option<(String, Vec<u8>)>,
}

/// Handles project brief intake and admin triage.
#[derive(Debug, Clone)]
pub struct SubmissionService {
    submissions: Arc<SubmissionRepository>,
    uploads: Arc<UploadStore>,
}

impl SubmissionService {
    /// Creates a new submission service.
    pub fn new(submissions: Arc<SubmissionRepository>, uploads: Arc<UploadStore>) -> Self {
        Self {
            submissions,
            uploads,
        }
    }

    /// Accepts a brief from the public site, storing the attachment
    /// first so a failed write never leaves a dangling record.
    pub async fn submit(&self, intake: SubmissionIntake) -> AppResult<ProjectSubmission> {
        if intake.name.trim().is_empty() {
            return Err(AppError::validation("name is required"));
        }
        if intake.email.trim().is_empty() {
            return Err(AppError::validation("email is required"));
        }
        if !intake.email.contains('@') {
            return Err(AppError::validation("Invalid email format"));
        }
        if intake.brief.trim().is_empty() {
            return Err(AppError::validation("brief is required"));
        }

        let (attachment_path, attachment_name) = match intake.attachment {
            Some((name, data)) => {
                let stored = self.uploads.store(&name, &data).await?;
                (Some(stored), Some(name))
            }
            None => (None, None),
        };

        let submission = self
            .submissions
            .create(&CreateProjectSubmission {
                name: intake.name,
                email: intake.email,
                company: intake.company,
                brief: intake.brief,
                attachment_path,
                attachment_name,
            })
            .await?;

        info!(
            submission_id = %submission.id,
            has_attachment = submission.attachment_path.is_some(),
            "Project brief received"
        );
        Ok(submission)
    }

    /// Lists submissions, optionally filtered by status (admin view).
    pub async fn list_admin(
        &self,
        status: Option<SubmissionStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ProjectSubmission>> {
        self.submissions.list(status, page).await
    }

    /// Fetches one submission (admin view).
    pub async fn get_admin(&self, id: Uuid) -> AppResult<ProjectSubmission> {
        self.submissions
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Submission not found"))
    }

    /// Transitions a submission's triage status.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: SubmissionStatus,
    ) -> AppResult<ProjectSubmission> {
        let submission = self
            .submissions
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::not_found("Submission not found"))?;

        info!(submission_id = %id, status = %status, "Submission status updated");
        Ok(submission)
    }

    /// Resolve a submission's attachment to a filesystem path for
    /// download, along with its original filename.
    pub async fn attachment(&self, id: Uuid) -> AppResult<(PathBuf, String)> {
        let submission = self.get_admin(id).await?;

        let relative = submission
            .attachment_path
            .ok_or_else(|| AppError::not_found("Submission has no attachment"))?;
        let name = submission
            .attachment_name
            .unwrap_or_else(|| "attachment".to_string());

        Ok((self.uploads.resolve(&relative)?, name))
    }
}
