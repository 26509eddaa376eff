//! Cache invalidation port.
//!
//! Mutation paths signal staleness through this trait rather than talking
//! to the cache backend directly, so services can be handed a fake in
//! tests and the read path never depends on invalidation succeeding.

use async_trait::async_trait;

/// Tag-keyed invalidation signal consumed by the read-through cache.
///
/// Implementations must be fire-and-forget relative to readers: a failed
/// invalidation is logged by the implementation and never surfaced to the
/// mutation path.
#[async_trait]
pub trait CacheInvalidator: Send + Sync + std::fmt::Debug + 'static {
    /// Mark all cached reads registered under `tag` as stale.
    async fn invalidate(&self, tag: &str);

    /// Apply [`invalidate`](Self::invalidate) to each tag. Tags are
    /// independent, so no ordering is guaranteed.
    async fn invalidate_many(&self, tags: &[&str]) {
        for tag in tags {
            self.invalidate(tag).await;
        }
    }
}
