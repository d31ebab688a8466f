//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ResolutionService, ResolutionSettings};
use crate::domain::click_queue::ClickQueue;
use crate::domain::repositories::ShortLinkRepository;
use crate::infrastructure::cache::CacheService;

/// Explicitly constructed handles for one service instance.
///
/// Built once in [`crate::server::run`] (or by tests) and cloned cheaply into
/// handlers; there is no process-global client state.
#[derive(Clone)]
pub struct AppState {
    pub resolution_service: Arc<ResolutionService>,
    pub repository: Arc<dyn ShortLinkRepository>,
    pub cache: Arc<dyn CacheService>,
    pub click_queue: Arc<dyn ClickQueue>,
}

impl AppState {
    /// Wires the resolution service over the given store, cache and queue.
    pub fn new(
        repository: Arc<dyn ShortLinkRepository>,
        cache: Arc<dyn CacheService>,
        click_queue: Arc<dyn ClickQueue>,
        settings: ResolutionSettings,
    ) -> Self {
        let resolution_service = Arc::new(ResolutionService::new(
            repository.clone(),
            cache.clone(),
            click_queue.clone(),
            settings,
        ));

        Self {
            resolution_service,
            repository,
            cache,
            click_queue,
        }
    }
}
