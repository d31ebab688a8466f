//! Validation of URLs submitted for shortening.

use serde_json::json;
use url::Url;

use crate::error::AppError;

/// Checks that `raw` is an absolute `http`/`https` URL with a host.
///
/// Returns the URL in its canonical serialized form (`https://www.wikipedia.org`
/// becomes `https://www.wikipedia.org/`).
///
/// # Errors
///
/// Returns [`AppError::InvalidInput`] describing why the URL was rejected.
pub fn validate_original_url(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();

    let parsed = Url::parse(trimmed).map_err(|e| {
        AppError::bad_request(
            "Invalid URL format",
            json!({ "url": raw, "reason": e.to_string() }),
        )
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AppError::bad_request(
            "URL scheme must be http or https",
            json!({ "url": raw, "scheme": parsed.scheme() }),
        ));
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(AppError::bad_request(
            "URL must include a host",
            json!({ "url": raw }),
        ));
    }

    Ok(parsed.into())
}
