#![allow(dead_code)]

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use serde_json::Value;
use shortlink::api::handlers::{health_handler, redirect_handler};
use shortlink::api::routes::api_routes;
use shortlink::application::services::ResolutionSettings;
use shortlink::domain::click_worker::run_click_worker;
use shortlink::domain::entities::NewShortLink;
use shortlink::domain::repositories::ShortLinkRepository;
use shortlink::infrastructure::cache::MemoryCache;
use shortlink::infrastructure::persistence::MemoryShortLinkRepository;
use shortlink::infrastructure::queue::ChannelClickQueue;
use shortlink::state::AppState;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

pub const BASE_URL: &str = "http://localhost:8000";

/// A fully wired service over in-memory backends with a live click worker.
pub struct TestApp {
    pub state: AppState,
    pub repository: Arc<MemoryShortLinkRepository>,
    pub cache: Arc<MemoryCache>,
    pub worker: JoinHandle<()>,
}

pub fn test_settings() -> ResolutionSettings {
    ResolutionSettings {
        base_url: BASE_URL.to_string(),
        ..ResolutionSettings::default()
    }
}

pub fn create_test_app() -> TestApp {
    create_test_app_with(test_settings())
}

pub fn create_test_app_with(settings: ResolutionSettings) -> TestApp {
    let repository = Arc::new(MemoryShortLinkRepository::new());
    let cache = Arc::new(MemoryCache::new(settings.cache_ttl_seconds));
    let (queue, rx) = ChannelClickQueue::bounded(1000);

    let worker = tokio::spawn(run_click_worker(rx, repository.clone(), 4));

    let state = AppState::new(repository.clone(), cache.clone(), Arc::new(queue), settings);

    TestApp {
        state,
        repository,
        cache,
        worker,
    }
}

/// Same routes as the production router, without the path normalization wrapper.
pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_routes())
        .route("/{short_id}", get(redirect_handler))
        .with_state(state)
}

pub fn test_server(app: &TestApp) -> TestServer {
    TestServer::new(test_router(app.state.clone())).unwrap()
}

pub async fn insert_link(repository: &MemoryShortLinkRepository, short_id: &str, url: &str) {
    repository
        .insert_if_absent(NewShortLink {
            short_id: short_id.to_string(),
            original_url: url.to_string(),
        })
        .await
        .unwrap();
}

/// Extracts the short_id from a `short_url` returned by the create endpoint.
pub fn short_id_of(short_url: &str) -> String {
    short_url.rsplit('/').next().unwrap().to_string()
}

/// Polls the analytics endpoint until `clicks` reaches `expected` or two seconds pass.
pub async fn wait_for_clicks(server: &TestServer, short_id: &str, expected: i64) -> Value {
    let mut json = Value::Null;

    for _ in 0..200 {
        json = server
            .get(&format!("/api/analytics/{}", short_id))
            .await
            .json::<Value>();

        if json["clicks"].as_i64() == Some(expected) {
            break;
        }

        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    json
}
