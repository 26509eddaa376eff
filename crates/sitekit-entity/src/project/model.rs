//! Portfolio project entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

/// A portfolio project shown on the public site.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    /// Unique project identifier.
    pub id: Uuid,
    /// URL slug (unique).
    pub slug: String,
    /// Project title.
    pub title: String,
    /// One-paragraph summary for listings.
    pub summary: Option<String>,
    /// Full case-study description.
    pub description: Option<String>,
    /// Cover image URL.
    pub cover_image: Option<String>,
    /// Technology names used on the project (JSONB).
    pub technologies: Option<Json<Vec<String>>>,
    /// Free-form structured details: client, year, links, … (JSONB).
    pub metadata: Option<serde_json::Value>,
    /// Sort key for listings.
    pub sort_order: i32,
    /// Whether the project is publicly visible.
    pub is_active: bool,
    /// When the project was created.
    pub created_at: DateTime<Utc>,
    /// When the project was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProject {
    /// URL slug.
    pub slug: String,
    /// Project title.
    pub title: String,
    /// Listing summary.
    pub summary: Option<String>,
    /// Case-study description.
    pub description: Option<String>,
    /// Cover image URL.
    pub cover_image: Option<String>,
    /// Technology names.
    pub technologies: Option<Vec<String>>,
    /// Structured details.
    pub metadata: Option<serde_json::Value>,
    /// Sort key.
    #[serde(default)]
    pub sort_order: i32,
    /// Public visibility.
    #[serde(default = "crate::default_true")]
    pub is_active: bool,
}

/// Partial update for a project. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProject {
    /// New slug.
    pub slug: Option<String>,
    /// New title.
    pub title: Option<String>,
    /// New summary.
    pub summary: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New cover image URL.
    pub cover_image: Option<String>,
    /// Replacement technology list.
    pub technologies: Option<Vec<String>>,
    /// Replacement structured details.
    pub metadata: Option<serde_json::Value>,
    /// New sort key.
    pub sort_order: Option<i32>,
    /// New visibility.
    pub is_active: Option<bool>,
}
