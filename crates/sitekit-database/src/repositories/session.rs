//! Token session repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use sitekit_core::error::{AppError, ErrorKind};
use sitekit_core::result::AppResult;
use sitekit_entity::session::{AuthSession, CreateAuthSession};

/// Repository for token-scheme session records.
#[derive(Debug, Clone)]
pub struct AuthSessionRepository {
    pool: PgPool,
}

impl AuthSessionRepository {
    /// Create a new session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new session record.
    pub async fn create(&self, data: &CreateAuthSession) -> AppResult<AuthSession> {
        sqlx::query_as::<_, AuthSession>(
            "INSERT INTO auth_sessions (user_id, token, user_agent, ip_address, expires_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.token)
        .bind(&data.user_agent)
        .bind(&data.ip_address)
        .bind(data.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create session", e))
    }

    /// Find an unexpired session by its token.
    pub async fn find_valid_by_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Option<AuthSession>> {
        sqlx::query_as::<_, AuthSession>(
            "SELECT * FROM auth_sessions WHERE token = $1 AND expires_at > $2",
        )
        .bind(token)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find session", e))
    }

    /// Delete a session by its token. Returns `true` if a row was removed.
    pub async fn delete_by_token(&self, token: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM auth_sessions WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete session", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove sessions that expired before `cutoff`. Returns the number removed.
    pub async fn delete_expired(&self, cutoff: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM auth_sessions WHERE expires_at <= $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to prune sessions", e)
            })?;
        Ok(result.rows_affected())
    }
}
