//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short_id to its original URL.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// # Request Flow
///
/// 1. Check the cache for the URL
/// 2. On miss or cache failure, query the database and repopulate the cache
/// 3. Enqueue a click event for the background worker (never awaited)
/// 4. Return 307 Temporary Redirect
///
/// # Errors
///
/// Returns 404 Not Found if the short_id doesn't exist.
/// Returns 503 Service Unavailable if the cache missed and the database is down.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let original_url = state.resolution_service.resolve(&short_id).await?;

    Ok(Redirect::temporary(&original_url))
}
