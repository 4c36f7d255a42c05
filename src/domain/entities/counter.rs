//! Named sequence counter.

use sqlx::FromRow;

/// Counter that hands out short codes for new links.
pub const LINK_SEQUENCE: &str = "sequence_value";

/// A durable, monotonically increasing counter.
///
/// `value` is the last number handed out; `0` means nothing has been
/// allocated yet. Rows only ever move forward.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Counter {
    pub name: String,
    pub value: i64,
}
