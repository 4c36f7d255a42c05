//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`; mocks are
//! generated with `mockall` for unit tests.
//!
//! - [`LinkRepository`] - short link storage
//! - [`SequenceAllocator`] - durable atomic counters

pub mod link_repository;
pub mod sequence_allocator;

pub use link_repository::LinkRepository;
pub use sequence_allocator::SequenceAllocator;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use sequence_allocator::MockSequenceAllocator;
