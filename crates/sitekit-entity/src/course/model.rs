//! Course entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

/// A course in the public catalog.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Course {
    /// Unique course identifier.
    pub id: Uuid,
    /// URL slug (unique).
    pub slug: String,
    /// Course title.
    pub title: String,
    /// One-paragraph summary for listings.
    pub summary: Option<String>,
    /// Full course description.
    pub description: Option<String>,
    /// Price in cents.
    pub price_cents: i64,
    /// Selling points shown on the course page (JSONB).
    pub features: Option<Json<Vec<String>>>,
    /// Sort key for listings.
    pub sort_order: i32,
    /// Whether the course is publicly visible.
    pub is_active: bool,
    /// When the course was created.
    pub created_at: DateTime<Utc>,
    /// When the course was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCourse {
    /// URL slug.
    pub slug: String,
    /// Course title.
    pub title: String,
    /// Listing summary.
    pub summary: Option<String>,
    /// Full description.
    pub description: Option<String>,
    /// Price in cents.
    pub price_cents: i64,
    /// Selling points.
    pub features: Option<Vec<String>>,
    /// Sort key.
    #[serde(default)]
    pub sort_order: i32,
    /// Public visibility.
    #[serde(default = "crate::default_true")]
    pub is_active: bool,
}

/// Partial update for a course. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCourse {
    /// New slug.
    pub slug: Option<String>,
    /// New title.
    pub title: Option<String>,
    /// New summary.
    pub summary: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New price in cents.
    pub price_cents: Option<i64>,
    /// Replacement feature list.
    pub features: Option<Vec<String>>,
    /// New sort key.
    pub sort_order: Option<i32>,
    /// New visibility.
    pub is_active: Option<bool>,
}
