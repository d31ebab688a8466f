//! Handler for per-link analytics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::analytics::AnalyticsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the durable click count for a short link.
///
/// # Endpoint
///
/// `GET /api/analytics/{short_id}`
///
/// Reads the database directly; counts lag redirects by however long the
/// click worker takes to catch up.
///
/// # Errors
///
/// Returns 404 Not Found if the short_id doesn't exist.
pub async fn analytics_handler(
    State(state): State<AppState>,
    Path(short_id): Path<String>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let link = state.resolution_service.analytics(&short_id).await?;

    Ok(Json(link.into()))
}
