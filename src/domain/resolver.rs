//! Hostname resolution used by URL validation.

use async_trait::async_trait;
use std::io;

/// Why a hostname could not be resolved.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("lookup failed: {0}")]
    Lookup(#[from] io::Error),

    #[error("no addresses found")]
    NoAddresses,

    #[error("lookup timed out after {0} ms")]
    TimedOut(u64),
}

/// Resolves hostnames over the network.
///
/// Implementations perform exactly one lookup per call and never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Succeeds if `host` resolves to at least one address.
    async fn resolve(&self, host: &str) -> Result<(), ResolveError>;
}
