//! Network hostname resolution.

use async_trait::async_trait;
use std::time::Duration;
use tokio::net::lookup_host;
use tokio::time::timeout;

use crate::domain::resolver::{HostResolver, ResolveError};

/// Resolves hostnames with the system resolver via [`tokio::net::lookup_host`].
///
/// Every lookup is bounded by `timeout`; an expired lookup counts as a failure.
#[derive(Debug, Clone)]
pub struct TokioHostResolver {
    timeout: Duration,
}

impl TokioHostResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl HostResolver for TokioHostResolver {
    async fn resolve(&self, host: &str) -> Result<(), ResolveError> {
        // lookup_host wants a socket address; the port is irrelevant here.
        let lookup = lookup_host((host, 0));

        let mut addrs = match timeout(self.timeout, lookup).await {
            Ok(result) => result?,
            Err(_) => {
                let millis = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);
                return Err(ResolveError::TimedOut(millis));
            }
        };

        match addrs.next() {
            Some(addr) => {
                tracing::debug!(host, %addr, "DNS lookup succeeded");
                Ok(())
            }
            None => Err(ResolveError::NoAddresses),
        }
    }
}
