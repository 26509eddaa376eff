//! Blog post repository implementation.

use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use sitekit_core::error::{AppError, ErrorKind};
use sitekit_core::result::AppResult;
use sitekit_core::types::pagination::{PageRequest, PageResponse};
use sitekit_entity::blog::{BlogPost, CreateBlogPost};

/// Repository for blog post CRUD and query operations.
#[derive(Debug, Clone)]
pub struct BlogPostRepository {
    pool: PgPool,
}

impl BlogPostRepository {
    /// Create a new blog post repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a post by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<BlogPost>> {
        sqlx::query_as::<_, BlogPost>("SELECT * FROM blog_posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find post", e))
    }

    /// Find a publicly visible post by slug.
    pub async fn find_active_by_slug(&self, slug: &str) -> AppResult<Option<BlogPost>> {
        sqlx::query_as::<_, BlogPost>(
            "SELECT * FROM blog_posts WHERE slug = $1 AND is_active = TRUE",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find post by slug", e))
    }

    /// List publicly visible posts in display order.
    pub async fn list_active(&self) -> AppResult<Vec<BlogPost>> {
        sqlx::query_as::<_, BlogPost>(
            "SELECT * FROM blog_posts WHERE is_active = TRUE \
             ORDER BY sort_order ASC, created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list posts", e))
    }

    /// List all posts with pagination (admin view, unfiltered).
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<BlogPost>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blog_posts")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count posts", e))?;

        let posts = sqlx::query_as::<_, BlogPost>(
            "SELECT * FROM blog_posts ORDER BY sort_order ASC, created_at DESC \
             LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list posts", e))?;

        Ok(PageResponse::new(posts, page, total as u64))
    }

    /// Create a new post.
    pub async fn create(&self, data: &CreateBlogPost) -> AppResult<BlogPost> {
        sqlx::query_as::<_, BlogPost>(
            "INSERT INTO blog_posts \
             (slug, title, excerpt, body, cover_image, tags, sort_order, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(&data.slug)
        .bind(&data.title)
        .bind(&data.excerpt)
        .bind(&data.body)
        .bind(&data.cover_image)
        .bind(data.tags.clone().map(Json))
        .bind(data.sort_order)
        .bind(data.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("blog_posts_slug_key") =>
            {
                AppError::conflict(format!("Slug '{}' already exists", data.slug))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create post", e),
        })
    }

    /// Write back a full post row.
    pub async fn update(&self, post: &BlogPost) -> AppResult<BlogPost> {
        sqlx::query_as::<_, BlogPost>(
            "UPDATE blog_posts SET \
             slug = $2, title = $3, excerpt = $4, body = $5, cover_image = $6, \
             tags = $7, sort_order = $8, is_active = $9, updated_at = now() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(post.id)
        .bind(&post.slug)
        .bind(&post.title)
        .bind(&post.excerpt)
        .bind(&post.body)
        .bind(&post.cover_image)
        .bind(&post.tags)
        .bind(post.sort_order)
        .bind(post.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("blog_posts_slug_key") =>
            {
                AppError::conflict(format!("Slug '{}' already exists", post.slug))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update post", e),
        })
    }

    /// Delete a post. Returns `true` if a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete post", e))?;
        Ok(result.rows_affected() > 0)
    }
}
