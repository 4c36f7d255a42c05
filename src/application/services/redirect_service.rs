//! Short code resolution.

use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Resolves short codes back to their stored links.
pub struct RedirectService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> RedirectService<L> {
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Looks up the link for a short code taken from a request path.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `code` is not a non-negative integer
    /// or no link has that code. Malformed codes never reach storage.
    pub async fn resolve(&self, code: &str) -> Result<ShortLink, AppError> {
        let short_code = parse_short_code(code).ok_or(AppError::NotFound)?;

        self.link_repository
            .find_by_code(short_code)
            .await?
            .ok_or(AppError::NotFound)
    }
}

/// Parses a path segment as a short code: ASCII digits only, within `i64`.
pub fn parse_short_code(code: &str) -> Option<i64> {
    if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    code.parse().ok()
}
