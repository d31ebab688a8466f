//! Cache service trait and error types.

use async_trait::async_trait;

/// Errors that can occur inside a cache backend.
///
/// These never escape [`CacheService`] implementations; they are logged and
/// turned into misses or no-ops.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Volatile short_id → original URL lookup with bounded lifetime.
///
/// The cache is never authoritative. Implementations must be fail-open: a
/// backend failure is reported as a miss (`Ok(None)`) or a silent no-op so
/// the caller falls through to the durable store.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process TTL map
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the original URL for a short_id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` on cache hit
    /// - `Ok(None)` on cache miss or backend error
    async fn get_url(&self, short_id: &str) -> CacheResult<Option<String>>;

    /// Stores a mapping; `ttl_seconds = None` uses the backend default.
    ///
    /// Backend errors are logged and reported as `Ok(())`.
    async fn set_url(
        &self,
        short_id: &str,
        original_url: &str,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()>;

    /// Checks if the cache backend is reachable.
    async fn health_check(&self) -> bool;
}
