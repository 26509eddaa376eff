//! In-memory cache implementation using the moka crate.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use sitekit_core::config::cache::MemoryCacheConfig;
use sitekit_core::result::AppResult;
use sitekit_core::traits::cache::CacheProvider;

/// A cached value together with its own expiry deadline.
///
/// moka evicts by capacity; per-entry TTLs are enforced here on read so
/// a short-lived entry never outlives its deadline.
#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Instant,
}

/// In-memory cache provider using moka.
#[derive(Debug, Clone)]
pub struct MemoryCacheProvider {
    /// The underlying moka cache.
    cache: Cache<String, Entry>,
}

impl MemoryCacheProvider {
    /// Create a new in-memory cache from configuration.
    pub fn new(config: &MemoryCacheConfig) -> Self {
        let cache = Cache::builder().max_capacity(config.max_capacity).build();
        Self { cache }
    }

    async fn live_entry(&self, key: &str) -> Option<Entry> {
        let entry = self.cache.get(key).await?;
        if entry.expires_at <= Instant::now() {
            self.cache.invalidate(key).await;
            return None;
        }
        Some(entry)
    }
}

#[async_trait]
impl CacheProvider for MemoryCacheProvider {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.live_entry(key).await.map(|e| e.value))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        self.cache
            .insert(
                key.to_string(),
                Entry {
                    value: value.to_string(),
                    expires_at: Instant::now() + ttl,
                },
            )
            .await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.cache.invalidate(key).await;
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.live_entry(key).await.is_some())
    }

    async fn delete_pattern(&self, pattern: &str) -> AppResult<u64> {
        // moka has no pattern scan; patterns are always `prefix*` here, so
        // prefix matching over an iteration is sufficient.
        let prefix = pattern.trim_end_matches('*').to_string();
        let keys_to_remove: Vec<String> = self
            .cache
            .iter()
            .filter(|(key, _)| key.starts_with(&prefix))
            .map(|(key, _)| key.to_string())
            .collect();

        let count = keys_to_remove.len() as u64;
        for key in keys_to_remove {
            self.cache.invalidate(&key).await;
        }

        debug!(pattern, count, "Deleted keys matching pattern");
        Ok(count)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn flush_all(&self) -> AppResult<()> {
        self.cache.invalidate_all();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> MemoryCacheProvider {
        MemoryCacheProvider::new(&MemoryCacheConfig::default())
    }

    #[tokio::test]
    async fn test_set_get_delete() {
        let cache = provider();
        cache
            .set("k", "v", Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!(cache.get("k").await.unwrap().as_deref(), Some("v"));
        assert!(cache.exists("k").await.unwrap());

        cache.delete("k").await.unwrap();
        assert!(cache.get("k").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_entries_expire() {
        let cache = provider();
        cache
            .set("short", "v", Duration::from_millis(10))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(cache.get("short").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_pattern_is_prefix_scoped() {
        let cache = provider();
        let ttl = Duration::from_secs(60);
        cache.set("app:a:1", "1", ttl).await.unwrap();
        cache.set("app:a:2", "2", ttl).await.unwrap();
        cache.set("app:b:1", "3", ttl).await.unwrap();

        let removed = cache.delete_pattern("app:a:*").await.unwrap();
        assert_eq!(removed, 2);
        assert!(cache.get("app:a:1").await.unwrap().is_none());
        assert_eq!(cache.get("app:b:1").await.unwrap().as_deref(), Some("3"));
    }
}
