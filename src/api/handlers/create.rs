//! Handler for link creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::create::{CreateRequest, CreateResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for one URL.
///
/// # Endpoint
///
/// `POST /api/create`
///
/// # Request Body
///
/// ```json
/// { "url": "https://www.wikipedia.org/" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "http://localhost:8000/AbC123" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the body is malformed or the URL is invalid
/// - 500 Internal Server Error if no unique short id could be generated
/// - 503 Service Unavailable if the database is unreachable
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateRequest>, JsonRejection>,
) -> Result<Json<CreateResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    payload.validate()?;

    let created = state.resolution_service.create(&payload.url).await?;

    Ok(Json(CreateResponse {
        short_url: created.short_url,
    }))
}
