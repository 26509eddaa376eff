//! Blog service: public cached reads and admin CRUD.

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
use sitekit_database::repositories::blog::BlogPostRepository;
use sitekit_entity::blog::{BlogPost, CreateBlogPost, UpdateBlogPost};

/// Handles blog post reads and mutations.
#[derive(Debug, Clone)]
pub struct BlogService {
    posts: Arc<BlogPostRepository>,
    cache: Arc<CacheManager>,
    invalidator: Arc<dyn CacheInvalidator>,
}

impl BlogService {
    /// Creates a new blog service.
    pub fn new(
        posts: Arc<BlogPostRepository>,
        cache: Arc<CacheManager>,
        invalidator: Arc<dyn CacheInvalidator>,
    ) -> Self {
        Self {
            posts,
            cache,
            invalidator,
        }
    }

    /// Lists publicly visible posts, read-through cached.
    pub async fn list_public(&self) -> AppResult<Vec<BlogPost>> {
        let key = tags::collection_key(tags::BLOG_POSTS);
        if let Ok(Some(cached)) = self.cache.get_json::<Vec<BlogPost>>(&key).await {
            return Ok(cached);
        }

        let posts = self.posts.list_active().await?;
        if let Err(e) = self
            .cache
            .set_json(&key, &posts, self.cache.default_ttl())
            .await
        {
            warn!(error = %e, "Failed to cache blog listing");
        }
        Ok(posts)
    }

    /// Fetches a publicly visible post by slug, read-through cached.
    pub async fn get_public(&self, slug: &str) -> AppResult<BlogPost> {
        let key = tags::entry_key(tags::BLOG_POSTS, slug);
        if let Ok(Some(cached)) = self.cache.get_json::<BlogPost>(&key).await {
            return Ok(cached);
        }

        let post = self
            .posts
            .find_active_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Post not found"))?;

        if let Err(e) = self
            .cache
            .set_json(&key, &post, self.cache.default_ttl())
            .await
        {
            warn!(error = %e, "Failed to cache blog post");
        }
        Ok(post)
    }

    /// Lists all posts (admin view, unfiltered).
    pub async fn list_admin(&self, page: &PageRequest) -> AppResult<PageResponse<BlogPost>> {
        self.posts.list(page).await
    }

    /// Creates a post and invalidates the blog tag.
    pub async fn create(&self, data: CreateBlogPost) -> AppResult<BlogPost> {
        if data.title.trim().is_empty() {
            return Err(AppError::validation("title is required"));
        }
        if data.slug.trim().is_empty() {
            return Err(AppError::validation("slug is required"));
        }

        let post = self.posts.create(&data).await?;
        self.invalidator.invalidate(tags::BLOG_POSTS).await;

        info!(post_id = %post.id, slug = %post.slug, "Blog post created");
        Ok(post)
    }

    /// Applies a partial update and invalidates the blog tag.
    pub async fn update(&self, id: Uuid, patch: UpdateBlogPost) -> AppResult<BlogPost> {
        let mut post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Post not found"))?;

        if let Some(slug) = patch.slug {
            post.slug = slug;
        }
        if let Some(title) = patch.title {
            if title.trim().is_empty() {
                return Err(AppError::validation("title cannot be empty"));
            }
            post.title = title;
        }
        if let Some(excerpt) = patch.excerpt {
            post.excerpt = Some(excerpt);
        }
        if let Some(body) = patch.body {
            post.body = body;
        }
        if let Some(cover_image) = patch.cover_image {
            post.cover_image = Some(cover_image);
        }
        if let Some(tags_list) = patch.tags {
            post.tags = Some(Json(tags_list));
        }
        if let Some(sort_order) = patch.sort_order {
            post.sort_order = sort_order;
        }
        if let Some(is_active) = patch.is_active {
            post.is_active = is_active;
        }

        let post = self.posts.update(&post).await?;
        self.invalidator.invalidate(tags::BLOG_POSTS).await;
        Ok(post)
    }

    /// Deletes a post and invalidates the blog tag.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let removed = self.posts.delete(id).await?;
        if !removed {
            return Err(AppError::not_found("Post not found"));
        }
        self.invalidator.invalidate(tags::BLOG_POSTS).await;
        Ok(())
    }
}
