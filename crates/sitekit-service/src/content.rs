//! Content service: page sections (lists of cards).
//!
//! Public reads are cached per section slug, so the slug doubles as the
//! section's cache tag (`services`, `service-section`, …). Card and list
//! mutations therefore invalidate both the generic tag and the owning
//! section's slug tag.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use sitekit_cache::{CacheManager, tags};
use sitekit_core::error::AppError;
use sitekit_core::result::AppResult;
use sitekit_core::traits::cache::CacheProvider;
use sitekit_core::traits::invalidator::CacheInvalidator;
use sitekit_database::repositories::content_card::ContentCardRepository;
use sitekit_database::repositories::content_list::ContentListRepository;
use sitekit_entity::content::{
    ContentCard, ContentList, CreateContentCard, CreateContentList, UpdateContentCard,
    UpdateContentList,
};

/// A section as rendered publicly: the list plus its visible cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSection {
    /// The section definition.
    pub list: ContentList,
    /// Visible cards in display order.
    pub cards: Vec<ContentCard>,
}

/// Handles content section reads and mutations.
#[derive(Debug, Clone)]
pub struct ContentService {
    lists: Arc<ContentListRepository>,
    cards: Arc<ContentCardRepository>,
    cache: Arc<CacheManager>,
    invalidator: Arc<dyn CacheInvalidator>,
}

impl ContentService {
    /// Creates a new content service.
    pub fn new(
        lists: Arc<ContentListRepository>,
        cards: Arc<ContentCardRepository>,
        cache: Arc<CacheManager>,
        invalidator: Arc<dyn CacheInvalidator>,
    ) -> Self {
        Self {
            lists,
            cards,
            cache,
            invalidator,
        }
    }

    /// Fetches a publicly visible section by slug, read-through cached.
    pub async fn get_section(&self, slug: &str) -> AppResult<ContentSection> {
        let key = tags::collection_key(slug);
        if let Ok(Some(cached)) = self.cache.get_json::<ContentSection>(&key).await {
            return Ok(cached);
        }

        let list = self
            .lists
            .find_active_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Section not found"))?;
        let cards = self.cards.list_active_by_list(list.id).await?;
        let section = ContentSection { list, cards };

        if let Err(e) = self
            .cache
            .set_json(&key, &section, self.cache.default_ttl())
            .await
        {
            warn!(error = %e, slug, "Failed to cache content section");
        }
        Ok(section)
    }

    // ── Lists ──────────────────────────────────────────────

    /// Lists every section definition (admin view).
    pub async fn list_lists(&self) -> AppResult<Vec<ContentList>> {
        self.lists.list().await
    }

    /// Creates a section and invalidates its tags.
    pub async fn create_list(&self, data: CreateContentList) -> AppResult<ContentList> {
        if data.slug.trim().is_empty() {
            return Err(AppError::validation("slug is required"));
        }
        if data.title.trim().is_empty() {
            return Err(AppError::validation("title is required"));
        }

        let list = self.lists.create(&data).await?;
        self.invalidator
            .invalidate_many(&[tags::CONTENT_LISTS, list.slug.as_str()])
            .await;

        info!(list_id = %list.id, slug = %list.slug, "Content list created");
        Ok(list)
    }

    /// Applies a partial update to a section and invalidates its tags.
    pub async fn update_list(&self, id: Uuid, patch: UpdateContentList) -> AppResult<ContentList> {
        let mut list = self
            .lists
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Section not found"))?;
        let old_slug = list.slug.clone();

        if let Some(slug) = patch.slug {
            list.slug = slug;
        }
        if let Some(title) = patch.title {
            if title.trim().is_empty() {
                return Err(AppError::validation("title cannot be empty"));
            }
            list.title = title;
        }
        if let Some(description) = patch.description {
            list.description = Some(description);
        }
        if let Some(sort_order) = patch.sort_order {
            list.sort_order = sort_order;
        }
        if let Some(is_active) = patch.is_active {
            list.is_active = is_active;
        }

        let list = self.lists.update(&list).await?;
        self.invalidator
            .invalidate_many(&[tags::CONTENT_LISTS, old_slug.as_str(), list.slug.as_str()])
            .await;
        Ok(list)
    }

    /// Deletes a section (cards cascade) and invalidates its tags.
    pub async fn delete_list(&self, id: Uuid) -> AppResult<()> {
        let list = self
            .lists
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Section not found"))?;

        self.lists.delete(id).await?;
        self.invalidator
            .invalidate_many(&[tags::CONTENT_LISTS, tags::CONTENT_CARDS, list.slug.as_str()])
            .await;
        Ok(())
    }

    // ── Cards ──────────────────────────────────────────────

    /// Lists every card of a section (admin view).
    pub async fn list_cards(&self, list_id: Uuid) -> AppResult<Vec<ContentCard>> {
        self.cards.list_by_list(list_id).await
    }

    /// Creates a card and invalidates its section's tags.
    pub async fn create_card(&self, data: CreateContentCard) -> AppResult<ContentCard> {
        if data.title.trim().is_empty() {
            return Err(AppError::validation("title is required"));
        }

        let list = self
            .lists
            .find_by_id(data.list_id)
            .await?
            .ok_or_else(|| AppError::validation("Unknown list_id"))?;

        let card = self.cards.create(&data).await?;
        self.invalidator
            .invalidate_many(&[tags::CONTENT_CARDS, list.slug.as_str()])
            .await;

        info!(card_id = %card.id, list = %list.slug, "Content card created");
        Ok(card)
    }

    /// Applies a partial update to a card and invalidates its section's tags.
    pub async fn update_card(&self, id: Uuid, patch: UpdateContentCard) -> AppResult<ContentCard> {
        let mut card = self
            .cards
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Card not found"))?;

        if let Some(title) = patch.title {
            if title.trim().is_empty() {
                return Err(AppError::validation("title cannot be empty"));
            }
            card.title = title;
        }
        if let Some(body) = patch.body {
            card.body = Some(body);
        }
        if let Some(icon) = patch.icon {
            card.icon = Some(icon);
        }
        if let Some(metadata) = patch.metadata {
            card.metadata = Some(metadata);
        }
        if let Some(sort_order) = patch.sort_order {
            card.sort_order = sort_order;
        }
        if let Some(is_active) = patch.is_active {
            card.is_active = is_active;
        }

        let card = self.cards.update(&card).await?;
        self.invalidate_card_tags(card.list_id).await;
        Ok(card)
    }

    /// Deletes a card and invalidates its section's tags.
    pub async fn delete_card(&self, id: Uuid) -> AppResult<()> {
        let card = self
            .cards
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Card not found"))?;

        self.cards.delete(id).await?;
        self.invalidate_card_tags(card.list_id).await;
        Ok(())
    }

    async fn invalidate_card_tags(&self, list_id: Uuid) {
        match self.lists.find_by_id(list_id).await {
            Ok(Some(list)) => {
                self.invalidator
                    .invalidate_many(&[tags::CONTENT_CARDS, list.slug.as_str()])
                    .await;
            }
            _ => {
                // Slug unknown; still flush the generic card tag.
                self.invalidator.invalidate(tags::CONTENT_CARDS).await;
            }
        }
    }
}
