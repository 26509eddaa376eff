//! Content list entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A named group of content cards rendered as a page section.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContentList {
    /// Unique list identifier.
    pub id: Uuid,
    /// Section slug (unique), e.g. `services` or `service-section`.
    pub slug: String,
    /// Section title.
    pub title: String,
    /// Section intro text.
    pub description: Option<String>,
    /// Sort key when multiple sections render together.
    pub sort_order: i32,
    /// Whether the section is publicly visible.
    pub is_active: bool,
    /// When the list was created.
    pub created_at: DateTime<Utc>,
    /// When the list was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a content list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateContentList {
    /// Section slug.
    pub slug: String,
    /// Section title.
    pub title: String,
    /// Intro text.
    pub description: Option<String>,
    /// Sort key.
    #[serde(default)]
    pub sort_order: i32,
    /// Public visibility.
    #[serde(default = "crate::default_true")]
    pub is_active: bool,
}

/// Partial update for a content list. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateContentList {
    /// New slug.
    pub slug: Option<String>,
    /// New title.
    pub title: Option<String>,
    /// New intro text.
    pub description: Option<String>,
    /// New sort key.
    pub sort_order: Option<i32>,
    /// New visibility.
    pub is_active: Option<bool>,
}
