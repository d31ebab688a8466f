//! Click event model for asynchronous click accounting.

use chrono::{DateTime, Utc};

/// A single successful redirect, waiting to be counted.
///
/// Produced by the resolution service on every cache hit or durable-store
/// hit and consumed at-least-once by
/// [`crate::domain::click_worker::run_click_worker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub short_id: String,
    pub occurred_at: DateTime<Utc>,
}

impl ClickEvent {
    /// Creates a click event stamped with the current time.
    pub fn new(short_id: impl Into<String>) -> Self {
        Self {
            short_id: short_id.into(),
            occurred_at: Utc::now(),
        }
    }
}
