//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::OnceCell;
use tokio::time::{Instant, timeout};
use tracing::{debug, info, warn};

/// Budget for establishing the first connection, including the PING.
const CONNECT_TIMEOUT: Duration = Duration::from_millis(500);

/// How long a failed connect suppresses further attempts.
const RECONNECT_COOLDOWN: Duration = Duration::from_secs(5);

/// Redis cache implementation for fast redirect lookups.
///
/// The connection is established lazily. If Redis is unreachable at startup
/// the cache behaves as a miss on every call. A failed connect is retried at
/// most once per [`RECONNECT_COOLDOWN`], so caching resumes on its own once
/// Redis comes back without every redirect paying for a connect attempt.
/// After the first successful connect, `ConnectionManager` handles reconnects.
///
/// All operations are fail-open: errors are logged but don't propagate.
pub struct RedisCache {
    client: Client,
    connection: OnceCell<ConnectionManager>,
    retry_after: Mutex<Option<Instant>>,
    default_ttl: u64,
    key_prefix: String,
}

impl RedisCache {
    /// Creates the cache and makes a first connection attempt.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `default_ttl_seconds` - TTL applied when [`CacheService::set_url`] is
    ///   called with `ttl_seconds = None`; controlled via `CACHE_TTL_SECONDS`
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] only if the URL is invalid. An
    /// unreachable server is logged and retried on later calls.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let cache = Self {
            client,
            connection: OnceCell::new(),
            retry_after: Mutex::new(None),
            default_ttl: default_ttl_seconds,
            key_prefix: "url:".to_string(),
        };

        match cache.connection().await {
            Ok(_) => info!("Connected to Redis"),
            Err(e) => warn!(
                error = %e,
                "Redis unreachable, cache will degrade to misses until it recovers"
            ),
        }

        Ok(cache)
    }

    /// Returns a handle to the shared connection, connecting on first use.
    async fn connection(&self) -> CacheResult<ConnectionManager> {
        if let Some(manager) = self.connection.get() {
            return Ok(manager.clone());
        }

        if self.in_cooldown() {
            return Err(CacheError::ConnectionError(
                "Redis reconnect cooling down".to_string(),
            ));
        }

        let result = self
            .connection
            .get_or_try_init(|| async {
                timeout(CONNECT_TIMEOUT, self.open_manager())
                    .await
                    .map_err(|_| {
                        CacheError::ConnectionError("Timed out connecting to Redis".to_string())
                    })?
            })
            .await;

        match result {
            Ok(manager) => Ok(manager.clone()),
            Err(e) => {
                self.start_cooldown();
                Err(e)
            }
        }
    }

    async fn open_manager(&self) -> CacheResult<ConnectionManager> {
        let manager = ConnectionManager::new(self.client.clone())
            .await
            .map_err(|e| {
                CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
            })?;

        let mut conn = manager.clone();
        conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        Ok(manager)
    }

    fn in_cooldown(&self) -> bool {
        self.retry_after
            .lock()
            .map(|retry_after| retry_after.is_some_and(|at| Instant::now() < at))
            .unwrap_or(false)
    }

    fn start_cooldown(&self) {
        if let Ok(mut retry_after) = self.retry_after.lock() {
            *retry_after = Some(Instant::now() + RECONNECT_COOLDOWN);
        }
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, short_id: &str) -> String {
        format!("{}{}", self.key_prefix, short_id)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_url(&self, short_id: &str) -> CacheResult<Option<String>> {
        let mut conn = match self.connection().await {
            Ok(conn) => conn,
            Err(e) => {
                debug!(short_id, error = %e, "Redis unavailable, treating as miss");
                return Ok(None);
            }
        };

        match conn.get::<_, Option<String>>(self.build_key(short_id)).await {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(short_id, error = %e, "Redis GET failed");
                Ok(None)
            }
        }
    }

    async fn set_url(
        &self,
        short_id: &str,
        original_url: &str,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        let mut conn = match self.connection().await {
            Ok(conn) => conn,
            Err(e) => {
                debug!(short_id, error = %e, "Redis unavailable, skipping SET");
                return Ok(());
            }
        };
        let ttl = ttl_seconds.unwrap_or(self.default_ttl);

        match conn
            .set_ex::<_, _, ()>(self.build_key(short_id), original_url, ttl)
            .await
        {
            Ok(()) => {
                debug!(short_id, ttl, "Cache SET");
                Ok(())
            }
            Err(e) => {
                warn!(short_id, error = %e, "Redis SET failed");
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        match self.connection().await {
            Ok(mut conn) => conn.ping::<()>().await.is_ok(),
            Err(_) => false,
        }
    }
}
