//! Durable sequence allocation.

use crate::error::AppError;
use async_trait::async_trait;

/// Hands out unique, monotonically increasing integers per counter name.
///
/// Atomicity comes from the backing store's increment/upsert primitive, so
/// the guarantee holds across any number of processes sharing that store.
/// Implementations must not keep sequence state in process memory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SequenceAllocator: Send + Sync {
    /// Atomically increments `counter` and returns the new value.
    ///
    /// A counter that does not exist yet is created at zero in the same
    /// operation, so the first call returns `1`.
    ///
    /// # Errors
    ///
    /// - [`AppError::SequenceExhausted`] when the counter would overflow
    /// - [`AppError::Database`] on storage failures
    async fn next(&self, counter: &str) -> Result<i64, AppError>;

    /// Returns the last value handed out, or `None` if `counter` was never used.
    ///
    /// Read-only: never creates the counter.
    async fn current(&self, counter: &str) -> Result<Option<i64>, AppError>;
}
