//! Submission status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Triage status of a project brief submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "submission_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// Freshly submitted, not yet looked at.
    New,
    /// Reviewed by the team.
    Reviewed,
    /// Closed out.
    Archived,
}

impl SubmissionStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Reviewed => "reviewed",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = sitekit_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(Self::New),
            "reviewed" => Ok(Self::Reviewed),
            "archived" => Ok(Self::Archived),
            _ => Err(sitekit_core::AppError::validation(format!(
                "Invalid submission status: '{s}'. Expected one of: new, reviewed, archived"
            ))),
        }
    }
}
