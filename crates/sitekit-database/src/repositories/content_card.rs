//! Content card repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use sitekit_core::error::{AppError, ErrorKind};
use sitekit_core::result::AppResult;
use sitekit_entity::content::{ContentCard, CreateContentCard};

/// Repository for content card operations.
#[derive(Debug, Clone)]
pub struct ContentCardRepository {
    pool: PgPool,
}

impl ContentCardRepository {
    /// Create a new content card repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a card by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ContentCard>> {
        sqlx::query_as::<_, ContentCard>("SELECT * FROM content_cards WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find card", e))
    }

    /// List publicly visible cards of a list in display order.
    pub async fn list_active_by_list(&self, list_id: Uuid) -> AppResult<Vec<ContentCard>> {
        sqlx::query_as::<_, ContentCard>(
            "SELECT * FROM content_cards \
             WHERE list_id = $1 AND is_active = TRUE \
             ORDER BY sort_order ASC, created_at ASC",
        )
        .bind(list_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list cards", e))
    }

    /// List every card of a list (admin view, unfiltered).
    pub async fn list_by_list(&self, list_id: Uuid) -> AppResult<Vec<ContentCard>> {
        sqlx::query_as::<_, ContentCard>(
            "SELECT * FROM content_cards WHERE list_id = $1 \
             ORDER BY sort_order ASC, created_at ASC",
        )
        .bind(list_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list cards", e))
    }

    /// Create a new card.
    pub async fn create(&self, data: &CreateContentCard) -> AppResult<ContentCard> {
        sqlx::query_as::<_, ContentCard>(
            "INSERT INTO content_cards \
             (list_id, title, body, icon, metadata, sort_order, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(data.list_id)
        .bind(&data.title)
        .bind(&data.body)
        .bind(&data.icon)
        .bind(&data.metadata)
        .bind(data.sort_order)
        .bind(data.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("content_cards_list_id_fkey") =>
            {
                AppError::validation("Unknown list_id")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create card", e),
        })
    }

    /// Write back a full card row.
    pub async fn update(&self, card: &ContentCard) -> AppResult<ContentCard> {
        sqlx::query_as::<_, ContentCard>(
            "UPDATE content_cards SET \
             title = $2, body = $3, icon = $4, metadata = $5, sort_order = $6, \
             is_active = $7, updated_at = now() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(card.id)
        .bind(&card.title)
        .bind(&card.body)
        .bind(&card.icon)
        .bind(&card.metadata)
        .bind(card.sort_order)
        .bind(card.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update card", e))
    }

    /// Delete a card. Returns `true` if a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM content_cards WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete card", e))?;
        Ok(result.rows_affected() > 0)
    }
}
