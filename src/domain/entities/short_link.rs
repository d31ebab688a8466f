//! ShortLink entity: the durable mapping from a short_id to its target URL.

use chrono::{DateTime, Utc};

/// A persisted short link with its click counter.
///
/// Everything except `click_count` is immutable once created; the counter is
/// only ever moved forward by the click worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub id: i64,
    pub short_id: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        id: i64,
        short_id: String,
        original_url: String,
        created_at: DateTime<Utc>,
        click_count: i64,
    ) -> Self {
        Self {
            id,
            short_id,
            original_url,
            created_at,
            click_count,
        }
    }
}

/// Input data for creating a new short link.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub short_id: String,
    pub original_url: String,
}
