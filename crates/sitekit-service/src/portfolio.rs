//! Portfolio service: public project reads and admin CRUD.

use std::sync::Arc;

use sqlx::types::Json;
use tracing::{info, warn};
use uuid::Uuid;

use sitekit_cache::{CacheManager, tags};
use sitekit_core::error::AppError;
use sitekit_core::result::AppResult;
use sitekit_core::traits::cache::CacheProvider;
use sitekit_core::traits::invalidator::CacheInvalidator;
use sitekit_core::types::pagination::{PageRequest, PageResponse};
use sitekit_database::repositories::project::ProjectRepository;
use sitekit_entity::project::{CreateProject, Project, UpdateProject};

/// Handles portfolio project reads and mutations.
#[derive(Debug, Clone)]
pub struct PortfolioService {
    projects: Arc<ProjectRepository>,
    cache: Arc<CacheManager>,
    invalidator: Arc<dyn CacheInvalidator>,
}

impl PortfolioService {
    /// Creates a new portfolio service.
    pub fn new(
        projects: Arc<ProjectRepository>,
        cache: Arc<CacheManager>,
        invalidator: Arc<dyn CacheInvalidator>,
    ) -> Self {
        Self {
            projects,
            cache,
            invalidator,
        }
    }

    /// Lists publicly visible projects, read-through cached.
    pub async fn list_public(&self) -> AppResult<Vec<Project>> {
        let key = tags::collection_key(tags::PROJECTS);
        if let Ok(Some(cached)) = self.cache.get_json::<Vec<Project>>(&key).await {
            return Ok(cached);
        }

        let projects = self.projects.list_active().await?;
        if let Err(e) = self
            .cache
            .set_json(&key, &projects, self.cache.default_ttl())
            .await
        {
            warn!(error = %e, "Failed to cache project listing");
        }
        Ok(projects)
    }

    /// Fetches a publicly visible project by slug, read-through cached.
    pub async fn get_public(&self, slug: &str) -> AppResult<Project> {
        let key = tags::entry_key(tags::PROJECTS, slug);
        if let Ok(Some(cached)) = self.cache.get_json::<Project>(&key).await {
            return Ok(cached);
        }

        let project = self
            .projects
            .find_active_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found"))?;

        if let Err(e) = self
            .cache
            .set_json(&key, &project, self.cache.default_ttl())
            .await
        {
            warn!(error = %e, slug, "Failed to cache project");
        }
        Ok(project)
    }

    /// Lists all projects (admin view, unfiltered).
    pub async fn list_admin(&self, page: &PageRequest) -> AppResult<PageResponse<Project>> {
        self.projects.list(page).await
    }

    /// Creates a project and invalidates the portfolio tag.
    pub async fn create(&self, data: CreateProject) -> AppResult<Project> {
        if data.slug.trim().is_empty() {
            return Err(AppError::validation("slug is required"));
        }
        if data.title.trim().is_empty() {
            return Err(AppError::validation("title is required"));
        }

        let project = self.projects.create(&data).await?;
        self.invalidator.invalidate(tags::PROJECTS).await;

        info!(project_id = %project.id, slug = %project.slug, "Project created");
        Ok(project)
    }

    /// Applies a partial update and invalidates the portfolio tag.
    pub async fn update(&self, id: Uuid, patch: UpdateProject) -> AppResult<Project> {
        let mut project = self
            .projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found"))?;

        if let Some(slug) = patch.slug {
            project.slug = slug;
        }
        if let Some(title) = patch.title {
            if title.trim().is_empty() {
                return Err(AppError::validation("title cannot be empty"));
            }
            project.title = title;
        }
        if let Some(summary) = patch.summary {
            project.summary = Some(summary);
        }
        if let Some(description) = patch.description {
            project.description = Some(description);
        }
        if let Some(cover_image) = patch.cover_image {
            project.cover_image = Some(cover_image);
        }
        if let Some(technologies) = patch.technologies {
            project.technologies = Some(Json(technologies));
        }
        if let Some(metadata) = patch.metadata {
            project.metadata = Some(metadata);
        }
        if let Some(sort_order) = patch.sort_order {
            project.sort_order = sort_order;
        }
        if let Some(is_active) = patch.is_active {
            project.is_active = is_active;
        }

        let project = self.projects.update(&project).await?;
        self.invalidator.invalidate(tags::PROJECTS).await;
        Ok(project)
    }

    /// Deletes a project and invalidates the portfolio tag.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let removed = self.projects.delete(id).await?;
        if !removed {
            return Err(AppError::not_found("Project not found"));
        }
        self.invalidator.invalidate(tags::PROJECTS).await;
        Ok(())
    }
}
