//! Short link entity: the mapping from an original URL to its numeric code.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A stored short link.
///
/// Immutable once created. `short_code` is unique across all records and
/// always comes from one allocation of the link counter.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ShortLink {
    pub original_url: String,
    #[sqlx(rename = "short_url")]
    pub short_code: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    pub fn new(original_url: String, short_code: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            original_url,
            short_code,
            created_at,
        }
    }
}

/// Input data for inserting a new short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortLink {
    pub original_url: String,
    pub short_code: i64,
}
