//! Portfolio project repository implementation.

use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use sitekit_core::error::{AppError, ErrorKind};
use sitekit_core::result::AppResult;
use sitekit_core::types::pagination::{PageRequest, PageResponse};
use sitekit_entity::project::{CreateProject, Project};

/// Repository for portfolio project operations.
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// Create a new project repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a project by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Project>> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find project", e))
    }

    /// Find a publicly visible project by slug.
    pub async fn find_active_by_slug(&self, slug: &str) -> AppResult<Option<Project>> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE slug = $1 AND is_active = TRUE")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find project by slug", e)
            })
    }

    /// List publicly visible projects in display order.
    pub async fn list_active(&self) -> AppResult<Vec<Project>> {
        sqlx::query_as::<_, Project>(
            "SELECT * FROM projects WHERE is_active = TRUE \
             ORDER BY sort_order ASC, created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list projects", e))
    }

    /// List all projects with pagination (admin view, unfiltered).
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Project>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count projects", e)
            })?;

        let projects = sqlx::query_as::<_, Project>(
            "SELECT * FROM projects ORDER BY sort_order ASC, created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list projects", e))?;

        Ok(PageResponse::new(projects, page, total as u64))
    }

    /// Create a new project.
    pub async fn create(&self, data: &CreateProject) -> AppResult<Project> {
        sqlx::query_as::<_, Project>(
            "INSERT INTO projects \
             (slug, title, summary, description, cover_image, technologies, metadata, \
              sort_order, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING *",
        )
        .bind(&data.slug)
        .bind(&data.title)
        .bind(&data.summary)
        .bind(&data.description)
        .bind(&data.cover_image)
        .bind(data.technologies.clone().map(Json))
        .bind(&data.metadata)
        .bind(data.sort_order)
        .bind(data.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("projects_slug_key") =>
            {
                AppError::conflict(format!("Slug '{}' already exists", data.slug))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create project", e),
        })
    }

    /// Write back a full project row.
    pub async fn update(&self, project: &Project) -> AppResult<Project> {
        sqlx::query_as::<_, Project>(
            "UPDATE projects SET \
             slug = $2, title = $3, summary = $4, description = $5, cover_image = $6, \
             technologies = $7, metadata = $8, sort_order = $9, is_active = $10, \
             updated_at = now() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(project.id)
        .bind(&project.slug)
        .bind(&project.title)
        .bind(&project.summary)
        .bind(&project.description)
        .bind(&project.cover_image)
        .bind(&project.technologies)
        .bind(&project.metadata)
        .bind(project.sort_order)
        .bind(project.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("projects_slug_key") =>
            {
                AppError::conflict(format!("Slug '{}' already exists", project.slug))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update project", e),
        })
    }

    /// Delete a project. Returns `true` if a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete project", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
