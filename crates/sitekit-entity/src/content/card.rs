//! Content card entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single card inside a content list.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContentCard {
    /// Unique card identifier.
    pub id: Uuid,
    /// The list this card belongs to.
    pub list_id: Uuid,
    /// Card title.
    pub title: String,
    /// Card body text.
    pub body: Option<String>,
    /// Icon name or URL.
    pub icon: Option<String>,
    /// Free-form structured extras: link targets, badges, … (JSONB).
    pub metadata: Option<serde_json::Value>,
    /// Sort key within the list.
    pub sort_order: i32,
    /// Whether the card is publicly visible.
    pub is_active: bool,
    /// When the card was created.
    pub created_at: DateTime<Utc>,
    /// When the card was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a content card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateContentCard {
    /// Owning list.
    pub list_id: Uuid,
    /// Card title.
    pub title: String,
    /// Body text.
    pub body: Option<String>,
    /// Icon name or URL.
    pub icon: Option<String>,
    /// Structured extras.
    pub metadata: Option<serde_json::Value>,
    /// Sort key.
    #[serde(default)]
    pub sort_order: i32,
    /// Public visibility.
    #[serde(default = "crate::default_true")]
    pub is_active: bool,
}

/// Partial update for a content card. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateContentCard {
    /// New title.
    pub title: Option<String>,
    /// New body text.
    pub body: Option<String>,
    /// New icon.
    pub icon: Option<String>,
    /// Replacement structured extras.
    pub metadata: Option<serde_json::Value>,
    /// New sort key.
    pub sort_order: Option<i32>,
    /// New visibility.
    pub is_active: Option<bool>,
}
