//! Queue abstraction between the redirect path and the click worker.

use crate::domain::click_event::ClickEvent;

/// Errors returned when an event cannot be handed to the queue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    #[error("click queue is full")]
    Full,
    #[error("click queue is closed")]
    Closed,
}

/// Producer side of the click event queue.
///
/// `enqueue` must never wait for the consumer: redirects call it inline and
/// treat a failure as a dropped click.
///
/// # Implementations
///
/// - [`crate::infrastructure::queue::ChannelClickQueue`] - bounded Tokio channel
#[cfg_attr(test, mockall::automock)]
pub trait ClickQueue: Send + Sync {
    fn enqueue(&self, event: ClickEvent) -> Result<(), QueueError>;

    /// Whether the consumer side has gone away.
    fn is_closed(&self) -> bool;

    /// Free slots remaining, when the backend can tell.
    fn remaining_capacity(&self) -> Option<usize>;
}
