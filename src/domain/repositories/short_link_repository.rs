//! Repository trait for the durable short link store.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Result of an atomic conditional insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The short_id was free and the link is now persisted.
    Inserted(ShortLink),
    /// Another link already owns this short_id; nothing was written.
    AlreadyExists,
}

/// Authoritative store for [`ShortLink`] records.
///
/// Implementations must enforce short_id uniqueness themselves (unique
/// constraint or an equivalent atomic primitive) so that concurrent creators
/// racing on the same code cannot both succeed.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortLinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryShortLinkRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkRepository: Send + Sync {
    /// Inserts the link only if no record with the same short_id exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] on store errors.
    async fn insert_if_absent(&self, new_link: NewShortLink) -> Result<InsertOutcome, AppError>;

    /// Finds a link by its short_id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] on store errors.
    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<ShortLink>, AppError>;

    /// Atomically adds one to the click counter.
    ///
    /// Returns `Ok(false)` when no link has this short_id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] on store errors.
    async fn increment_click_count(&self, short_id: &str) -> Result<bool, AppError>;

    /// Round-trips to the store; used by the health endpoint.
    async fn ping(&self) -> Result<(), AppError>;
}
