//! Domain layer: entities and the traits infrastructure implements.
//!
//! - [`entities`] - short links and counters
//! - [`repositories`] - link store and sequence allocator contracts
//! - [`resolver`] - hostname resolution contract used by URL validation
//!
//! Nothing here depends on the HTTP or database layers.

pub mod entities;
pub mod repositories;
pub mod resolver;
