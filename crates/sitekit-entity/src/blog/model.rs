//! Blog post entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

/// A published or draft blog post.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BlogPost {
    /// Unique post identifier.
    pub id: Uuid,
    /// URL slug (unique).
    pub slug: String,
    /// Post title.
    pub title: String,
    /// Short teaser shown in listings.
    pub excerpt: Option<String>,
    /// Full post body.
    pub body: String,
    /// Cover image URL.
    pub cover_image: Option<String>,
    /// Topic tags (JSONB).
    pub tags: Option<Json<Vec<String>>>,
    /// Sort key for listings (not required to be unique).
    pub sort_order: i32,
    /// Whether the post is publicly visible.
    pub is_active: bool,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// When the post was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a blog post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBlogPost {
    /// URL slug.
    pub slug: String,
    /// Post title.
    pub title: String,
    /// Teaser text.
    pub excerpt: Option<String>,
    /// Full body.
    pub body: String,
    /// Cover image URL.
    pub cover_image: Option<String>,
    /// Topic tags.
    pub tags: Option<Vec<String>>,
    /// Sort key.
    #[serde(default)]
    pub sort_order: i32,
    /// Public visibility.
    #[serde(default = "crate::default_true")]
    pub is_active: bool,
}

/// Partial update for a blog post. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlogPost {
    /// New slug.
    pub slug: Option<String>,
    /// New title.
    pub title: Option<String>,
    /// New teaser text.
    pub excerpt: Option<String>,
    /// New body.
    pub body: Option<String>,
    /// New cover image URL.
    pub cover_image: Option<String>,
    /// Replacement tag list.
    pub tags: Option<Vec<String>>,
    /// New sort key.
    pub sort_order: Option<i32>,
    /// New visibility.
    pub is_active: Option<bool>,
}
