//! # sitekit-cache
//!
//! Cache provider implementations and the tag invalidation bus for
//! Sitekit. Two backends are supported:
//!
//! - **memory**: In-process cache using [moka](https://crates.io/crates/moka)
//! - **redis**: Redis-backed cache using the [redis](https://crates.io/crates/redis) crate
//!
//! The provider is selected at runtime based on configuration. Public
//! reads are cached under per-tag key prefixes built by [`tags`]; the
//! [`invalidator::TagInvalidator`] deletes a tag's key space after
//! mutations.

pub mod invalidator;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;
pub mod tags;

pub use invalidator::TagInvalidator;
pub use provider::CacheManager;
