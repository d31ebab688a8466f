//! In-memory implementation of the short link repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::{InsertOutcome, ShortLinkRepository};
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    next_id: i64,
    links: HashMap<String, ShortLink>,
}

/// Process-local durable store for development and tests.
///
/// A single mutex makes `insert_if_absent` and `increment_click_count`
/// atomic, matching the guarantees of the PostgreSQL implementation. Data
/// lives only as long as the process.
#[derive(Default)]
pub struct MemoryShortLinkRepository {
    inner: Mutex<Inner>,
}

impl MemoryShortLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.lock().map(|inner| inner.links.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::unavailable("In-memory store lock poisoned", json!({})))
    }
}

#[async_trait]
impl ShortLinkRepository for MemoryShortLinkRepository {
    async fn insert_if_absent(&self, new_link: NewShortLink) -> Result<InsertOutcome, AppError> {
        let mut inner = self.lock()?;

        if inner.links.contains_key(&new_link.short_id) {
            return Ok(InsertOutcome::AlreadyExists);
        }

        inner.next_id += 1;
        let link = ShortLink::new(
            inner.next_id,
            new_link.short_id.clone(),
            new_link.original_url,
            Utc::now(),
            0,
        );
        inner.links.insert(new_link.short_id, link.clone());

        Ok(InsertOutcome::Inserted(link))
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self.lock()?.links.get(short_id).cloned())
    }

    async fn increment_click_count(&self, short_id: &str) -> Result<bool, AppError> {
        let mut inner = self.lock()?;

        match inner.links.get_mut(short_id) {
            Some(link) => {
                link.click_count += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.lock().map(|_| ())
    }
}
