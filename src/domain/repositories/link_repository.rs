//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Durable store of short links.
///
/// Links are insert-only: there is no update or delete.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds the link stored for an exact original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage failures.
    async fn find_by_original_url(&self, original_url: &str)
    -> Result<Option<ShortLink>, AppError>;

    /// Finds a link by its numeric short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage failures.
    async fn find_by_code(&self, short_code: i64) -> Result<Option<ShortLink>, AppError>;

    /// Inserts a new link.
    ///
    /// Uniqueness is enforced by the storage layer, not pre-checked.
    ///
    /// # Errors
    ///
    /// - [`AppError::DuplicateCode`] if the short code is already taken
    /// - [`AppError::DuplicateUrl`] if the original URL is already stored
    /// - [`AppError::Database`] on other storage failures
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Counts stored links.
    async fn count(&self) -> Result<i64, AppError>;
}
