//! DTOs for the analytics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortLink;

/// Durable view of a short link and its click counter.
///
/// `created_at` serializes as RFC 3339.
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub original_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl From<ShortLink> for AnalyticsResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            original_url: link.original_url,
            clicks: link.click_count,
            created_at: link.created_at,
        }
    }
}
