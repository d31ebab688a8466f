//! DTOs for the link creation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRequest {
    /// The original URL to shorten (must be an absolute http/https URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// Response carrying the fully qualified short URL.
#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub short_url: String,
}
