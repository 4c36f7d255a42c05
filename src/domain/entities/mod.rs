//! Core domain entities.
//!
//! - [`ShortLink`] - an original URL and the numeric code assigned to it
//! - [`Counter`] - a named durable sequence used to allocate codes

pub mod counter;
pub mod short_link;

pub use counter::{Counter, LINK_SEQUENCE};
pub use short_link::{NewShortLink, ShortLink};
