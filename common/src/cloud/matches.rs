use std::fmt;

use super::candidate::Candidate;
use super::provider::Provider;

/// A candidate that resolved and carries a known provider pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchResult {
    pub candidate: Candidate,
    pub provider: Provider,
}

impl MatchResult {
    pub fn new(candidate: Candidate, provider: Provider) -> Self {
        Self {
            candidate,
            provider,
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} points to {}", self.candidate, self.provider)
    }
}
