//! Team service: public member listing and admin CRUD.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use sitekit_cache::{CacheManager, tags};
use sitekit_core::error::AppError;
use sitekit_core::result::AppResult;
use sitekit_core::traits::cache::CacheProvider;
use sitekit_core::traits::invalidator::CacheInvalidator;
use sitekit_database::repositories::team::TeamMemberRepository;
use sitekit_entity::team::{CreateTeamMember, TeamMember, UpdateTeamMember};

/// Handles team member reads and mutations.
#[derive(Debug, Clone)]
pub struct TeamService {
    members: Arc<TeamMemberRepository>,
    cache: Arc<CacheManager>,
    invalidator: Arc<dyn CacheInvalidator>,
}

impl TeamService {
    /// Creates a new team service.
    pub fn new(
        members: Arc<TeamMemberRepository>,
        cache: Arc<CacheManager>,
        invalidator: Arc<dyn CacheInvalidator>,
    ) -> Self {
        Self {
            members,
            cache,
            invalidator,
        }
    }

    /// Lists publicly visible members, read-through cached.
    pub async fn list_public(&self) -> AppResult<Vec<TeamMember>> {
        let key = tags::collection_key(tags::TEAM_MEMBERS);
        if let Ok(Some(cached)) = self.cache.get_json::<Vec<TeamMember>>(&key).await {
            return Ok(cached);
        }

        let members = self.members.list_active().await?;
        if let Err(e) = self
            .cache
            .set_json(&key, &members, self.cache.default_ttl())
            .await
        {
            warn!(error = %e, "Failed to cache team listing");
        }
        Ok(members)
    }

    /// Lists every member (admin view, unfiltered).
    pub async fn list_admin(&self) -> AppResult<Vec<TeamMember>> {
        self.members.list().await
    }

    /// Creates a member and invalidates the team tag.
    pub async fn create(&self, data: CreateTeamMember) -> AppResult<TeamMember> {
        if data.name.trim().is_empty() {
            return Err(AppError::validation("name is required"));
        }

        let member = self.members.create(&data).await?;
        self.invalidator.invalidate(tags::TEAM_MEMBERS).await;

        info!(member_id = %member.id, "Team member created");
        Ok(member)
    }

    /// Applies a partial update and invalidates the team tag.
    pub async fn update(&self, id: Uuid, patch: UpdateTeamMember) -> AppResult<TeamMember> {
        let mut member = self
            .members
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Team member not found"))?;

        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("name cannot be empty"));
            }
            member.name = name;
        }
        if let Some(title) = patch.title {
            member.title = Some(title);
        }
        if let Some(bio) = patch.bio {
            member.bio = Some(bio);
        }
        if let Some(photo) = patch.photo {
            member.photo = Some(photo);
        }
        if let Some(links) = patch.links {
            member.links = Some(links);
        }
        if let Some(sort_order) = patch.sort_order {
            member.sort_order = sort_order;
        }
        if let Some(is_active) = patch.is_active {
            member.is_active = is_active;
        }

        let member = self.members.update(&member).await?;
        self.invalidator.invalidate(tags::TEAM_MEMBERS).await;
        Ok(member)
    }

    /// Deletes a member and invalidates the team tag.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let removed = self.members.delete(id).await?;
        if !removed {
            return Err(AppError::not_found("Team member not found"));
        }
        self.invalidator.invalidate(tags::TEAM_MEMBERS).await;
        Ok(())
    }
}
