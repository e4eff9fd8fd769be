//! Forward lookups through the operating system resolver.
//!
//! `getaddrinfo` blocks, so each lookup runs on tokio's blocking pool and is
//! raced against a timeout. A lookup that times out is reported as unresolved
//! right away, but its blocking thread stays busy until the platform resolver
//! gives up on its own; there is no portable way to cancel it.

use std::io;
use std::net::{IpAddr, ToSocketAddrs};
use std::time::Duration;

use async_trait::async_trait;
use nimbus_common::cloud::candidate::Candidate;
use nimbus_common::config::DEFAULT_RESOLVE_TIMEOUT;
use nimbus_common::resolving::{ResolutionOutcome, Resolver};
use tracing::debug;

#[derive(Clone, Debug)]
pub struct SystemResolver {
    timeout: Duration,
}

impl SystemResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for SystemResolver {
    fn default() -> Self {
        Self::new(DEFAULT_RESOLVE_TIMEOUT)
    }
}

#[async_trait]
impl Resolver for SystemResolver {
    async fn resolve(&self, candidate: &Candidate) -> ResolutionOutcome {
        let host: String = candidate.as_str().to_string();
        resolve_within(self.timeout, candidate, move || lookup_first(&host)).await
    }
}

/// Runs a blocking `lookup` on the blocking pool, giving up after `timeout`.
async fn resolve_within<F>(timeout: Duration, candidate: &Candidate, lookup: F) -> ResolutionOutcome
where
    F: FnOnce() -> io::Result<IpAddr> + Send + 'static,
{
    let lookup = tokio::task::spawn_blocking(lookup);

    match tokio::time::timeout(timeout, lookup).await {
        Ok(Ok(Ok(addr))) => {
            debug!(%candidate, %addr, "resolved");
            ResolutionOutcome::Resolved(addr)
        }
        Ok(Ok(Err(e))) => {
            debug!(%candidate, error = %e, "lookup failed");
            ResolutionOutcome::Unresolved
        }
        Ok(Err(e)) => {
            debug!(%candidate, error = %e, "lookup task aborted");
            ResolutionOutcome::Unresolved
        }
        Err(_) => {
            debug!(%candidate, ?timeout, "lookup timed out");
            ResolutionOutcome::Unresolved
        }
    }
}

fn lookup_first(host: &str) -> io::Result<IpAddr> {
    if host.is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty hostname"));
    }

    (host, 0u16)
        .to_socket_addrs()?
        .map(|addr| addr.ip())
        .next()
        .ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no addresses returned")
        })
}
