//! API route configuration.

use crate::api::handlers::{analytics_handler, create_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /create`               - Shorten a URL
/// - `GET  /analytics/{short_id}` - Durable click statistics for a link
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_handler))
        .route("/analytics/{short_id}", get(analytics_handler))
}
