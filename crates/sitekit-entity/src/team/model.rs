//! Team member entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A team member shown on the public site.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TeamMember {
    /// Unique member identifier.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Job title.
    pub title: Option<String>,
    /// Short biography.
    pub bio: Option<String>,
    /// Portrait image URL.
    pub photo: Option<String>,
    /// Social/profile links keyed by network name (JSONB).
    pub links: Option<serde_json::Value>,
    /// Sort key for listings.
    pub sort_order: i32,
    /// Whether the member is publicly visible.
    pub is_active: bool,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a team member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeamMember {
    /// Full name.
    pub name: String,
    /// Job title.
    pub title: Option<String>,
    /// Biography.
    pub bio: Option<String>,
    /// Portrait URL.
    pub photo: Option<String>,
    /// Profile links.
    pub links: Option<serde_json::Value>,
    /// Sort key.
    #[serde(default)]
    pub sort_order: i32,
    /// Public visibility.
    #[serde(default = "crate::default_true")]
    pub is_active: bool,
}

/// Partial update for a team member. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTeamMember {
    /// New name.
    pub name: Option<String>,
    /// New job title.
    pub title: Option<String>,
    /// New biography.
    pub bio: Option<String>,
    /// New portrait URL.
    pub photo: Option<String>,
    /// Replacement profile links.
    pub links: Option<serde_json::Value>,
    /// New sort key.
    pub sort_order: Option<i32>,
    /// New visibility.
    pub is_active: Option<bool>,
}
