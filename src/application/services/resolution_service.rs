//! Short link creation, redirect resolution and analytics.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tokio::time::timeout;
use tracing::{debug, error, info, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::click_queue::ClickQueue;
use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::{InsertOutcome, ShortLinkRepository};
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code, is_valid_code};
use crate::utils::url_validator::validate_original_url;

/// Tunables for [`ResolutionService`].
#[derive(Debug, Clone)]
pub struct ResolutionSettings {
    /// Public prefix of short URLs, e.g. `http://localhost:8000`.
    pub base_url: String,
    pub code_length: usize,
    /// Upper bound on generate → insert cycles per create.
    pub max_generation_attempts: usize,
    pub cache_ttl_seconds: u64,
    /// Budget for a single cache call; exceeding it counts as a miss.
    pub cache_timeout: Duration,
    /// Budget for a single durable store call; exceeding it is `Unavailable`.
    pub store_timeout: Duration,
}

impl Default for ResolutionSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            code_length: DEFAULT_CODE_LENGTH,
            max_generation_attempts: 10,
            cache_ttl_seconds: 3600,
            cache_timeout: Duration::from_millis(50),
            store_timeout: Duration::from_millis(2000),
        }
    }
}

/// A freshly created link and its public short URL.
#[derive(Debug, Clone)]
pub struct CreatedLink {
    pub link: ShortLink,
    pub short_url: String,
}

/// Orchestrates the durable store, the fast lookup cache and the click queue.
///
/// - **create**: bounded generate → `insert_if_absent` loop, then write-through to the cache
/// - **resolve**: cache-aside lookup, then a non-blocking click enqueue
/// - **analytics**: durable store only, the cache is never consulted
///
/// Cache failures are absorbed here; durable store failures surface as
/// [`AppError::Unavailable`].
pub struct ResolutionService {
    repository: Arc<dyn ShortLinkRepository>,
    cache: Arc<dyn CacheService>,
    clicks: Arc<dyn ClickQueue>,
    settings: ResolutionSettings,
}

impl ResolutionService {
    /// Creates a new resolution service.
    pub fn new(
        repository: Arc<dyn ShortLinkRepository>,
        cache: Arc<dyn CacheService>,
        clicks: Arc<dyn ClickQueue>,
        settings: ResolutionSettings,
    ) -> Self {
        Self {
            repository,
            cache,
            clicks,
            settings,
        }
    }

    pub fn settings(&self) -> &ResolutionSettings {
        &self.settings
    }

    /// Shortens `original_url`.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidInput`] if the URL is not absolute http/https; nothing is written
    /// - [`AppError::GenerationExhausted`] if every attempt collided with an existing code
    /// - [`AppError::Unavailable`] if the durable store fails or times out
    pub async fn create(&self, original_url: &str) -> Result<CreatedLink, AppError> {
        let original_url = validate_original_url(original_url)?;
        let attempts = self.settings.max_generation_attempts;

        for attempt in 1..=attempts {
            let new_link = NewShortLink {
                short_id: generate_code(self.settings.code_length),
                original_url: original_url.clone(),
            };
            let short_id = new_link.short_id.clone();

            let outcome = self
                .with_store_timeout("insert_if_absent", self.repository.insert_if_absent(new_link))
                .await?;

            match outcome {
                InsertOutcome::Inserted(link) => {
                    metrics::counter!("short_links_created_total").increment(1);
                    info!(short_id = %link.short_id, attempt, "Short link created");

                    self.cache_put(&link.short_id, &link.original_url).await;

                    let short_url = self.short_url(&link.short_id);
                    return Ok(CreatedLink { link, short_url });
                }
                InsertOutcome::AlreadyExists => {
                    metrics::counter!("short_link_generation_collisions_total").increment(1);
                    debug!(short_id, attempt, "Short id collision, retrying");
                }
            }
        }

        metrics::counter!("short_link_generation_exhausted_total").increment(1);
        error!(
            attempts,
            code_length = self.settings.code_length,
            "Short id space exhausted: every generated code collided"
        );

        Err(AppError::exhausted(
            "Unable to generate unique short id",
            json!({ "attempts": attempts, "code_length": self.settings.code_length }),
        ))
    }

    /// Resolves `short_id` to its original URL and enqueues one click event.
    ///
    /// The click is counted asynchronously; this call never waits for it.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the short_id is unknown
    /// - [`AppError::Unavailable`] if the cache missed and the durable store failed or timed out
    pub async fn resolve(&self, short_id: &str) -> Result<String, AppError> {
        if !is_valid_code(short_id) {
            return Err(not_found(short_id));
        }

        let original_url = match self.cache_get(short_id).await {
            Some(url) => {
                metrics::counter!("cache_hits_total").increment(1);
                debug!(short_id, "Cache HIT");
                url
            }
            None => {
                metrics::counter!("cache_misses_total").increment(1);
                debug!(short_id, "Cache MISS");

                let link = self
                    .with_store_timeout(
                        "find_by_short_id",
                        self.repository.find_by_short_id(short_id),
                    )
                    .await?
                    .ok_or_else(|| not_found(short_id))?;

                self.cache_put(&link.short_id, &link.original_url).await;
                link.original_url
            }
        };

        self.enqueue_click(short_id);

        Ok(original_url)
    }

    /// Reads the durable record for `short_id`, bypassing the cache.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the short_id is unknown
    /// - [`AppError::Unavailable`] if the durable store fails or times out
    pub async fn analytics(&self, short_id: &str) -> Result<ShortLink, AppError> {
        if !is_valid_code(short_id) {
            return Err(not_found(short_id));
        }

        self.with_store_timeout(
            "find_by_short_id",
            self.repository.find_by_short_id(short_id),
        )
        .await?
        .ok_or_else(|| not_found(short_id))
    }

    /// Builds the public short URL for a short_id.
    pub fn short_url(&self, short_id: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), short_id)
    }

    fn enqueue_click(&self, short_id: &str) {
        match self.clicks.enqueue(ClickEvent::new(short_id)) {
            Ok(()) => metrics::counter!("clicks_enqueued_total").increment(1),
            Err(e) => {
                metrics::counter!("clicks_dropped_total").increment(1);
                warn!(short_id, error = %e, "Click event dropped");
            }
        }
    }

    async fn cache_get(&self, short_id: &str) -> Option<String> {
        match timeout(self.settings.cache_timeout, self.cache.get_url(short_id)).await {
            Ok(Ok(value)) => value,
            Ok(Err(e)) => {
                warn!(short_id, error = %e, "Cache lookup failed, falling back to store");
                None
            }
            Err(_) => {
                warn!(short_id, "Cache lookup timed out, falling back to store");
                None
            }
        }
    }

    async fn cache_put(&self, short_id: &str, original_url: &str) {
        let ttl = Some(self.settings.cache_ttl_seconds);

        match timeout(
            self.settings.cache_timeout,
            self.cache.set_url(short_id, original_url, ttl),
        )
        .await
        {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!(short_id, error = %e, "Cache write failed"),
            Err(_) => warn!(short_id, "Cache write timed out"),
        }
    }

    async fn with_store_timeout<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = Result<T, AppError>>,
    ) -> Result<T, AppError> {
        match timeout(self.settings.store_timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                error!(operation, "Durable store call timed out");
                Err(AppError::unavailable(
                    "Durable store timed out",
                    json!({ "operation": operation }),
                ))
            }
        }
    }
}

fn not_found(short_id: &str) -> AppError {
    AppError::not_found("Short URL not found", json!({ "short_id": short_id }))
}
