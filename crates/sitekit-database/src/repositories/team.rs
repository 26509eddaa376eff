//! Team member repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use sitekit_core::error::{AppError, ErrorKind};
use sitekit_core::result::AppResult;
use sitekit_entity::team::{CreateTeamMember, TeamMember};

/// Repository for team member operations.
#[derive(Debug, Clone)]
pub struct TeamMemberRepository {
    pool: PgPool,
}

impl TeamMemberRepository {
    /// Create a new team member repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a member by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<TeamMember>> {
        sqlx::query_as::<_, TeamMember>("SELECT * FROM team_members WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find team member", e)
            })
    }

    /// List publicly visible members in display order.
    pub async fn list_active(&self) -> AppResult<Vec<TeamMember>> {
        sqlx::query_as::<_, TeamMember>(
            "SELECT * FROM team_members WHERE is_active = TRUE \
             ORDER BY sort_order ASC, name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list team members", e))
    }

    /// List every member (admin view, unfiltered).
    pub async fn list(&self) -> AppResult<Vec<TeamMember>> {
        sqlx::query_as::<_, TeamMember>(
            "SELECT * FROM team_members ORDER BY sort_order ASC, name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list team members", e))
    }

    /// Create a new member.
    pub async fn create(&self, data: &CreateTeamMember) -> AppResult<TeamMember> {
        sqlx::query_as::<_, TeamMember>(
            "INSERT INTO team_members (name, title, bio, photo, links, sort_order, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.title)
        .bind(&data.bio)
        .bind(&data.photo)
        .bind(&data.links)
        .bind(data.sort_order)
        .bind(data.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create team member", e))
    }

    /// Write back a full member row.
    pub async fn update(&self, member: &TeamMember) -> AppResult<TeamMember> {
        sqlx::query_as::<_, TeamMember>(
            "UPDATE team_members SET \
             name = $2, title = $3, bio = $4, photo = $5, links = $6, \
             sort_order = $7, is_active = $8, updated_at = now() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(member.id)
        .bind(&member.name)
        .bind(&member.title)
        .bind(&member.bio)
        .bind(&member.photo)
        .bind(&member.links)
        .bind(member.sort_order)
        .bind(member.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update team member", e))
    }

    /// Delete a member. Returns `true` if a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM team_members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete team member", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
