//! Bounded Tokio channel as the click event queue.

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use crate::domain::click_event::ClickEvent;
use crate::domain::click_queue::{ClickQueue, QueueError};

/// In-memory [`ClickQueue`] over an `mpsc` channel.
///
/// Enqueueing uses `try_send`, so a full buffer rejects the event instead of
/// stalling the redirect that produced it.
#[derive(Clone)]
pub struct ChannelClickQueue {
    sender: mpsc::Sender<ClickEvent>,
}

impl ChannelClickQueue {
    /// Creates a queue and the receiver the click worker consumes.
    pub fn bounded(capacity: usize) -> (Self, mpsc::Receiver<ClickEvent>) {
        let (sender, receiver) = mpsc::channel(capacity);
        (Self { sender }, receiver)
    }
}

impl ClickQueue for ChannelClickQueue {
    fn enqueue(&self, event: ClickEvent) -> Result<(), QueueError> {
        self.sender.try_send(event).map_err(|e| match e {
            TrySendError::Full(_) => QueueError::Full,
            TrySendError::Closed(_) => QueueError::Closed,
        })
    }

    fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    fn remaining_capacity(&self) -> Option<usize> {
        Some(self.sender.capacity())
    }
}
