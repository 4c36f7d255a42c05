//! Handler for link shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::{ShortenPayload, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short link for a URL.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// JSON `{"url": "https://www.example.com"}` or form-encoded `url=...`.
///
/// # Response
///
/// ```json
/// { "original_url": "https://www.example.com", "short_url": 1 }
/// ```
///
/// # Errors
///
/// - `200 {"error": "invalid url"}` if the URL is malformed, not http/https,
///   or its host does not resolve
/// - `500 {"error": "internal server error"}` on storage failures
pub async fn shorten_handler(
    State(state): State<AppState>,
    ShortenPayload(request): ShortenPayload,
) -> Result<Json<ShortenResponse>, AppError> {
    let link = state.shortening_service.shorten(&request.url).await?;

    Ok(Json(link.into()))
}
