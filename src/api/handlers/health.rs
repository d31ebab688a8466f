//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse, OverallStatus};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: database and click queue are operational
/// - **503 Service Unavailable**: the database or the click queue is down
///
/// The cache is reported but never degrades the overall status: redirects
/// stay correct without it, only slower.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected" },
///     "click_queue": { "status": "ok", "message": "Free slots: 10000" },
///     "cache": { "status": "error", "message": "Cache unreachable, serving from database" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let database = check_database(&state).await;
    let click_queue = check_click_queue(&state);
    let cache = check_cache(&state).await;

    let healthy = database.is_ok() && click_queue.is_ok();

    let response = HealthResponse {
        status: if healthy {
            OverallStatus::Healthy
        } else {
            OverallStatus::Degraded
        },
        version: env!("CARGO_PKG_VERSION"),
        checks: HealthChecks {
            database,
            click_queue,
            cache,
        },
    };

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}

/// Checks durable store connectivity.
async fn check_database(state: &AppState) -> CheckStatus {
    let budget = state.resolution_service.settings().store_timeout;

    match tokio::time::timeout(budget, state.repository.ping()).await {
        Ok(Ok(())) => CheckStatus::ok("Connected"),
        Ok(Err(e)) => CheckStatus::error(format!("Database error: {}", e)),
        Err(_) => CheckStatus::error("Database ping timed out"),
    }
}

/// Checks if the click accounting queue still has a consumer.
fn check_click_queue(state: &AppState) -> CheckStatus {
    if state.click_queue.is_closed() {
        return CheckStatus::error("Click queue is closed");
    }

    match state.click_queue.remaining_capacity() {
        Some(free) => CheckStatus::ok(format!("Free slots: {}", free)),
        None => CheckStatus::ok("Open"),
    }
}

/// Checks cache reachability.
async fn check_cache(state: &AppState) -> CheckStatus {
    let budget = state.resolution_service.settings().cache_timeout;

    match tokio::time::timeout(budget, state.cache.health_check()).await {
        Ok(true) => CheckStatus::ok("Reachable"),
        _ => CheckStatus::error("Cache unreachable, serving from database"),
    }
}
