//! DTOs for the link shortening endpoint.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortLink;
use crate::error::AppError;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL, stored byte for byte.
    #[validate(length(min = 1, max = 2048))]
    pub url: String,
}

/// A created or previously stored short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: i64,
}

impl From<ShortLink> for ShortenResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            original_url: link.original_url,
            short_url: link.short_code,
        }
    }
}

/// Extracts a [`ShortenRequest`] from either a JSON or a form-encoded body.
///
/// Any body that cannot be read as a request is reported as an invalid URL,
/// since the client sees the same `invalid url` response either way.
#[derive(Debug)]
pub struct ShortenPayload(pub ShortenRequest);

impl<S> FromRequest<S> for ShortenPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(is_json_content_type);

        let request = if is_json {
            let Json(request) = Json::<ShortenRequest>::from_request(req, state)
                .await
                .map_err(|e| AppError::invalid_url(e.body_text()))?;
            request
        } else {
            let Form(request) = Form::<ShortenRequest>::from_request(req, state)
                .await
                .map_err(|e| AppError::invalid_url(e.body_text()))?;
            request
        };

        request.validate()?;

        Ok(Self(request))
    }
}

/// Matches `application/json` and `application/*+json`, ignoring case and parameters.
fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.strip_prefix("application/") {
        Some(subtype) => subtype == "json" || subtype.ends_with("+json"),
        None => false,
    }
}
