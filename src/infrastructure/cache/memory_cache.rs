//! In-process TTL cache for development and tests.

use std::time::{Duration, Instant};

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;

/// Upper bound on cached short_ids for [`MemoryCache::new`].
pub const DEFAULT_MAX_CAPACITY: u64 = 10_000;

#[derive(Clone)]
struct CachedUrl {
    original_url: String,
    ttl: Duration,
}

/// Expires each entry after the TTL it was written with.
struct PerEntryTtl;

impl Expiry<String, CachedUrl> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _short_id: &String,
        value: &CachedUrl,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _short_id: &String,
        value: &CachedUrl,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// A [`CacheService`] backed by a bounded `moka` cache.
///
/// Every write carries its own TTL, falling back to the default one. Once
/// `max_capacity` entries are held, moka evicts the least useful ones.
pub struct MemoryCache {
    inner: Cache<String, CachedUrl>,
    default_ttl: Duration,
}

impl MemoryCache {
    pub fn new(default_ttl_seconds: u64) -> Self {
        Self::with_capacity(default_ttl_seconds, DEFAULT_MAX_CAPACITY)
    }

    pub fn with_capacity(default_ttl_seconds: u64, max_capacity: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(PerEntryTtl)
            .build();

        Self {
            inner,
            default_ttl: Duration::from_secs(default_ttl_seconds),
        }
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_url(&self, short_id: &str) -> CacheResult<Option<String>> {
        Ok(self
            .inner
            .get(short_id)
            .await
            .map(|cached| cached.original_url))
    }

    async fn set_url(
        &self,
        short_id: &str,
        original_url: &str,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        let ttl = ttl_seconds
            .map(Duration::from_secs)
            .unwrap_or(self.default_ttl);

        self.inner
            .insert(
                short_id.to_string(),
                CachedUrl {
                    original_url: original_url.to_string(),
                    ttl,
                },
            )
            .await;

        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
