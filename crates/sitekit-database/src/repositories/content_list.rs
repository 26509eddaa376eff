//! Content list repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use sitekit_core::error::{AppError, ErrorKind};
use sitekit_core::result::AppResult;
use sitekit_entity::content::{ContentList, CreateContentList};

/// Repository for content list operations.
#[derive(Debug, Clone)]
pub struct ContentListRepository {
    pool: PgPool,
}

impl ContentListRepository {
    /// Create a new content list repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a list by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ContentList>> {
        sqlx::query_as::<_, ContentList>("SELECT * FROM content_lists WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find content list", e)
            })
    }

    /// Find a publicly visible list by slug.
    pub async fn find_active_by_slug(&self, slug: &str) -> AppResult<Option<ContentList>> {
        sqlx::query_as::<_, ContentList>(
            "SELECT * FROM content_lists WHERE slug = $1 AND is_active = TRUE",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find content list by slug", e)
        })
    }

    /// List every list (admin view, unfiltered).
    pub async fn list(&self) -> AppResult<Vec<ContentList>> {
        sqlx::query_as::<_, ContentList>(
            "SELECT * FROM content_lists ORDER BY sort_order ASC, slug ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list content lists", e))
    }

    /// Create a new list.
    pub async fn create(&self, data: &CreateContentList) -> AppResult<ContentList> {
        sqlx::query_as::<_, ContentList>(
            "INSERT INTO content_lists (slug, title, description, sort_order, is_active) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.slug)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.sort_order)
        .bind(data.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("content_lists_slug_key") =>
            {
                AppError::conflict(format!("Slug '{}' already exists", data.slug))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create content list", e),
        })
    }

    /// Write back a full list row.
    pub async fn update(&self, list: &ContentList) -> AppResult<ContentList> {
        sqlx::query_as::<_, ContentList>(
            "UPDATE content_lists SET \
             slug = $2, title = $3, description = $4, sort_order = $5, is_active = $6, \
             updated_at = now() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(list.id)
        .bind(&list.slug)
        .bind(&list.title)
        .bind(&list.description)
        .bind(list.sort_order)
        .bind(list.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("content_lists_slug_key") =>
            {
                AppError::conflict(format!("Slug '{}' already exists", list.slug))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update content list", e),
        })
    }

    /// Delete a list (cards cascade). Returns `true` if a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM content_lists WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete content list", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
