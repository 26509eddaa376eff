//! Tag invalidation bus.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use sitekit_core::traits::cache::CacheProvider;
use sitekit_core::traits::invalidator::CacheInvalidator;

use crate::provider::CacheManager;
use crate::tags;

/// Marks cached reads stale by deleting every key under a tag's prefix.
///
/// Mutation paths call this synchronously after a successful write.
/// Failures are logged and swallowed so a cache outage never turns a
/// committed write into an error response.
#[derive(Debug, Clone)]
pub struct TagInvalidator {
    cache: Arc<CacheManager>,
}

impl TagInvalidator {
    /// Create a new invalidator over the given cache.
    pub fn new(cache: Arc<CacheManager>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl CacheInvalidator for TagInvalidator {
    async fn invalidate(&self, tag: &str) {
        match self.cache.delete_pattern(&tags::tag_pattern(tag)).await {
            Ok(count) => debug!(tag, count, "Invalidated cache tag"),
            Err(e) => warn!(tag, error = %e, "Cache tag invalidation failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::memory::MemoryCacheProvider;
    use sitekit_core::config::cache::MemoryCacheConfig;

    fn test_cache() -> Arc<CacheManager> {
        let provider = Arc::new(MemoryCacheProvider::new(&MemoryCacheConfig::default()));
        Arc::new(CacheManager::from_provider(
            provider,
            Duration::from_secs(60),
        ))
    }

    #[tokio::test]
    async fn test_invalidate_clears_only_the_tag() {
        let cache = test_cache();
        let ttl = Duration::from_secs(60);
        cache
            .set(&tags::collection_key(tags::COURSES), "[1]", ttl)
            .await
            .unwrap();
        cache
            .set(&tags::entry_key(tags::COURSES, "rust-101"), "{}", ttl)
            .await
            .unwrap();
        cache
            .set(&tags::collection_key(tags::PROJECTS), "[2]", ttl)
            .await
            .unwrap();

        let invalidator = TagInvalidator::new(Arc::clone(&cache));
        invalidator.invalidate(tags::COURSES).await;

        assert!(
            cache
                .get(&tags::collection_key(tags::COURSES))
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            cache
                .get(&tags::entry_key(tags::COURSES, "rust-101"))
                .await
                .unwrap()
                .is_none()
        );
        assert_eq!(
            cache
                .get(&tags::collection_key(tags::PROJECTS))
                .await
                .unwrap()
                .as_deref(),
            Some("[2]")
        );
    }

    #[tokio::test]
    async fn test_invalidate_many_covers_each_tag() {
        let cache = test_cache();
        let ttl = Duration::from_secs(60);
        for tag in [tags::SERVICES, tags::SERVICE_SECTION] {
            cache
                .set(&tags::collection_key(tag), "x", ttl)
                .await
                .unwrap();
        }

        let invalidator = TagInvalidator::new(Arc::clone(&cache));
        invalidator
            .invalidate_many(&[tags::SERVICES, tags::SERVICE_SECTION])
            .await;

        for tag in [tags::SERVICES, tags::SERVICE_SECTION] {
            assert!(
                cache
                    .get(&tags::collection_key(tag))
                    .await
                    .unwrap()
                    .is_none()
            );
        }
    }
}
