//! PostgreSQL repository implementations.
//!
//! - [`PgLinkRepository`] - short link storage
//! - [`PgSequenceAllocator`] - atomic counters

mod db_error;
pub mod pg_link_repository;
pub mod pg_sequence_allocator;

pub use pg_link_repository::PgLinkRepository;
pub use pg_sequence_allocator::PgSequenceAllocator;
