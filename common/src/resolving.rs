//! # Name Resolution Contract
//!
//! The pipeline only needs to know whether a candidate resolves. Every failure
//! mode (NXDOMAIN, timeout, malformed input, network errors) collapses into
//! [`ResolutionOutcome::Unresolved`] so a single bad name can never abort a batch.

use std::net::IpAddr;

use async_trait::async_trait;

use crate::cloud::candidate::Candidate;

/// Result of a single forward lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolutionOutcome {
    Resolved(IpAddr),
    Unresolved,
}

impl ResolutionOutcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, ResolutionOutcome::Resolved(_))
    }
}

/// Defines the contract for turning a candidate into a [`ResolutionOutcome`].
///
/// Implementations perform exactly one lookup attempt and must never fail:
/// anything that goes wrong is reported as [`ResolutionOutcome::Unresolved`].
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve(&self, candidate: &Candidate) -> ResolutionOutcome;
}
