//! Short link creation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::services::url_validator::UrlValidator;
use crate::domain::entities::{LINK_SEQUENCE, NewShortLink, ShortLink};
use crate::domain::repositories::{LinkRepository, SequenceAllocator};
use crate::error::AppError;

/// Creates short links, deduplicating by exact original URL.
///
/// Steps run strictly in order: validate, look up an existing link,
/// allocate a code, insert. A resubmitted URL returns the stored link
/// without allocating.
///
/// Two first-time submissions of the same URL may race past the lookup.
/// The `original_url` unique constraint turns the slower insert into
/// [`AppError::DuplicateUrl`], after which the stored link is returned
/// and the slower caller's code is left unused.
pub struct ShorteningService<L: LinkRepository, S: SequenceAllocator> {
    validator: UrlValidator,
    link_repository: Arc<L>,
    sequence_allocator: Arc<S>,
}

impl<L: LinkRepository, S: SequenceAllocator> ShorteningService<L, S> {
    pub fn new(
        validator: UrlValidator,
        link_repository: Arc<L>,
        sequence_allocator: Arc<S>,
    ) -> Self {
        Self {
            validator,
            link_repository,
            sequence_allocator,
        }
    }

    /// Returns the short link for `raw_url`, creating it on first submission.
    ///
    /// The stored `original_url` is `raw_url` exactly as given.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] if validation fails (no storage access happens)
    /// - [`AppError::DuplicateCode`], [`AppError::SequenceExhausted`] or
    ///   [`AppError::Database`] on persistence failures
    pub async fn shorten(&self, raw_url: &str) -> Result<ShortLink, AppError> {
        self.validator.validate(raw_url).await?;

        if let Some(existing) = self.link_repository.find_by_original_url(raw_url).await? {
            debug!(short_code = existing.short_code, "URL already shortened");
            return Ok(existing);
        }

        let short_code = self.sequence_allocator.next(LINK_SEQUENCE).await?;

        let new_link = NewShortLink {
            original_url: raw_url.to_string(),
            short_code,
        };

        match self.link_repository.insert(new_link).await {
            Ok(link) => {
                info!(short_code = link.short_code, "Short link created");
                Ok(link)
            }
            Err(AppError::DuplicateUrl) => {
                warn!(
                    unused_code = short_code,
                    "URL stored concurrently, returning existing link"
                );
                self.link_repository
                    .find_by_original_url(raw_url)
                    .await?
                    .ok_or_else(|| {
                        AppError::internal("original url conflict but no stored link found")
                    })
            }
            Err(e) => Err(e),
        }
    }
}
