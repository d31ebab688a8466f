//! Background worker that turns click events into durable counter increments.
//!
//! Events are partitioned into lanes by a hash of their short_id. Each lane
//! is a sequential loop, so increments for one short_id are applied in the
//! order they arrived while different short_ids are counted in parallel.
//!
//! Counting is at-least-once and not idempotent: a redelivered event counts
//! twice, and events still buffered when the process dies are lost.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, error, info, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::ShortLinkRepository;

/// Buffered events per lane before the dispatcher applies backpressure.
const LANE_CAPACITY: usize = 1024;

/// Retries after the first failed increment.
const MAX_RETRIES: usize = 3;

const RETRY_BASE_MS: u64 = 10;

/// What happened to a single click event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Recorded,
    /// The short_id does not exist; the event was dropped.
    UnknownLink,
    /// The store kept failing; the event was dropped.
    Failed,
}

/// Consumes click events until the sending side of `rx` is closed.
///
/// Spawns `concurrency` lanes (at least one), dispatches every event to the
/// lane owning its short_id, and returns once all lanes have drained.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    repository: Arc<dyn ShortLinkRepository>,
    concurrency: usize,
) {
    let lanes = concurrency.max(1);
    let mut senders = Vec::with_capacity(lanes);
    let mut tasks = JoinSet::new();

    for lane in 0..lanes {
        let (tx, lane_rx) = mpsc::channel(LANE_CAPACITY);
        senders.push(tx);
        tasks.spawn(run_lane(lane, lane_rx, repository.clone()));
    }

    info!(lanes, "Click worker started");

    while let Some(event) = rx.recv().await {
        let lane = lane_for(&event.short_id, lanes);

        if senders[lane].send(event).await.is_err() {
            error!(lane, "Click worker lane stopped, dropping event");
            metrics::counter!("clicks_dropped_total").increment(1);
        }
    }

    drop(senders);

    while let Some(joined) = tasks.join_next().await {
        if let Err(e) = joined {
            error!(error = %e, "Click worker lane terminated abnormally");
        }
    }

    info!("Click worker stopped");
}

async fn run_lane(
    lane: usize,
    mut rx: mpsc::Receiver<ClickEvent>,
    repository: Arc<dyn ShortLinkRepository>,
) {
    while let Some(event) = rx.recv().await {
        record_click(repository.as_ref(), &event).await;
    }

    debug!(lane, "Click worker lane drained");
}

/// Applies one click event, retrying transient store failures with jittered
/// exponential backoff.
pub async fn record_click(
    repository: &dyn ShortLinkRepository,
    event: &ClickEvent,
) -> ClickOutcome {
    let short_id = event.short_id.as_str();
    let strategy = ExponentialBackoff::from_millis(RETRY_BASE_MS)
        .max_delay(Duration::from_secs(1))
        .map(jitter)
        .take(MAX_RETRIES);

    match Retry::spawn(strategy, move || repository.increment_click_count(short_id)).await {
        Ok(true) => {
            metrics::counter!("clicks_recorded_total").increment(1);
            debug!(short_id, "Click recorded");
            ClickOutcome::Recorded
        }
        Ok(false) => {
            debug!(short_id, "Click for unknown short_id dropped");
            ClickOutcome::UnknownLink
        }
        Err(e) => {
            metrics::counter!("clicks_failed_total").increment(1);
            warn!(short_id, error = %e, "Failed to record click after retries");
            ClickOutcome::Failed
        }
    }
}

/// Maps a short_id to a lane index in `0..lanes`.
fn lane_for(short_id: &str, lanes: usize) -> usize {
    let mut hasher = DefaultHasher::new();
    short_id.hash(&mut hasher);
    (hasher.finish() % lanes as u64) as usize
}
