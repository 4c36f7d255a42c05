//! Infrastructure layer: concrete implementations of domain traits.
//!
//! - [`persistence`] - PostgreSQL repositories
//! - [`dns`] - system hostname resolver

pub mod dns;
pub mod persistence;
