//! # Provider Pattern Table
//!
//! Maps each [`Provider`] to the hostname fragments that give it away.
//!
//! The table is built once and then only read, so it can be shared between
//! workers behind an `Arc` without any locking. Lookups walk providers in
//! insertion order and return the first one owning a fragment contained in the
//! candidate; call sites never need to change when providers or patterns are added.

use super::provider::Provider;

const AWS_PATTERNS: &[&str] = &[".s3.amazonaws.com", ".cloudfront.net", ".elb.amazonaws.com"];
const AZURE_PATTERNS: &[&str] = &[
    ".blob.core.windows.net",
    ".azurewebsites.net",
    ".trafficmanager.net",
];
const GCP_PATTERNS: &[&str] = &[
    ".storage.googleapis.com",
    ".appspot.com",
    ".cloudfunctions.net",
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatternTable {
    entries: Vec<(Provider, Vec<String>)>,
}

impl PatternTable {
    /// An empty table. Nothing classifies until patterns are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table covering AWS, Azure and GCP.
    pub fn cloud_defaults() -> Self {
        Self::new()
            .with_patterns(Provider::Aws, AWS_PATTERNS.iter().copied())
            .with_patterns(Provider::Azure, AZURE_PATTERNS.iter().copied())
            .with_patterns(Provider::Gcp, GCP_PATTERNS.iter().copied())
    }

    /// Appends patterns for `provider`.
    ///
    /// A provider already in the table keeps its position; new patterns are
    /// added after its existing ones and duplicates are ignored.
    pub fn with_patterns<I, S>(mut self, provider: Provider, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let idx = match self.entries.iter().position(|(p, _)| *p == provider) {
            Some(idx) => idx,
            None => {
                self.entries.push((provider, Vec::new()));
                self.entries.len() - 1
            }
        };

        let existing = &mut self.entries[idx].1;
        for pattern in patterns {
            let pattern: String = pattern.into();
            if !existing.contains(&pattern) {
                existing.push(pattern);
            }
        }
        self
    }

    /// Returns the first provider (in table order) with a pattern occurring in `candidate`.
    pub fn provider_for(&self, candidate: &str) -> Option<Provider> {
        self.entries
            .iter()
            .find(|(_, patterns)| patterns.iter().any(|p| candidate.contains(p.as_str())))
            .map(|(provider, _)| *provider)
    }

    pub fn providers(&self) -> impl Iterator<Item = Provider> + '_ {
        self.entries.iter().map(|(provider, _)| *provider)
    }

    pub fn patterns(&self, provider: Provider) -> &[String] {
        self.entries
            .iter()
            .find(|(p, _)| *p == provider)
            .map(|(_, patterns)| patterns.as_slice())
            .unwrap_or(&[])
    }
}
