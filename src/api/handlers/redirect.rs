//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{code}`
///
/// # Responses
///
/// - `302 Found` with `Location` set to the stored URL
/// - `200 {"error": "Short URL not found"}` for unknown or non-numeric codes
/// - `500` on storage failures
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = state.redirect_service.resolve(&code).await?;

    debug!(short_code = link.short_code, "Redirecting");

    let location = location_header(&link.original_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds a `Location` value, falling back to the percent-encoded form
/// for stored URLs that are not valid header bytes.
fn location_header(original_url: &str) -> Result<HeaderValue, AppError> {
    if let Ok(value) = HeaderValue::from_str(original_url) {
        return Ok(value);
    }

    let url = Url::parse(original_url)
        .map_err(|e| AppError::internal(format!("stored url does not parse: {e}")))?;

    HeaderValue::from_str(url.as_str())
        .map_err(|e| AppError::internal(format!("stored url is not a valid header: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_header_ascii() {
        let value = location_header("https://www.example.com/path?q=1").unwrap();

        assert_eq!(value, "https://www.example.com/path?q=1");
    }

    #[test]
    fn test_location_header_non_ascii_is_encoded() {
        let value = location_header("https://example.com/straße").unwrap();

        assert_eq!(value, "https://example.com/stra%C3%9Fe");
    }
}
