//! # Cloud Exposure Pipeline
//!
//! Runs the resolve-then-classify unit of work over a batch of candidates.
//!
//! Every candidate becomes its own tokio task inside a [`JoinSet`]. A
//! [`Semaphore`] sized to the configured concurrency admits at most that many
//! units into their lookup at once; the rest wait for a permit.
//!
//! Results and progress are owned by the collecting loop in [`CloudPipeline::run`],
//! which is the only writer, so appends are serialized without a lock. A unit
//! that panics surfaces as a join error, is counted like any other completion
//! and contributes nothing.

use std::sync::Arc;

use nimbus_common::cloud::{candidate::Candidate, matches::MatchResult, patterns::PatternTable};
use nimbus_common::config::Config;
use nimbus_common::progress::ProgressObserver;
use nimbus_common::resolving::Resolver;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::classifier;

/// Orchestrates a run by:
/// 1. delegating lookups to the injected [`Resolver`].
/// 2. classifying resolved names against the shared [`PatternTable`].
pub struct CloudPipeline {
    resolver: Arc<dyn Resolver>,
    table: Arc<PatternTable>,
    concurrency: usize,
}

impl CloudPipeline {
    pub fn new(resolver: Arc<dyn Resolver>, table: Arc<PatternTable>, concurrency: usize) -> Self {
        Self {
            resolver,
            table,
            concurrency: concurrency.clamp(1, Semaphore::MAX_PERMITS),
        }
    }

    pub fn from_config(resolver: Arc<dyn Resolver>, table: Arc<PatternTable>, cfg: &Config) -> Self {
        Self::new(resolver, table, cfg.concurrency)
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Resolves and classifies every candidate, returning matches in input order.
    ///
    /// Returns only once every unit has finished. `observer` is told
    /// `(completed, total)` exactly once per candidate, whatever its outcome.
    pub async fn run(
        &self,
        candidates: Vec<Candidate>,
        observer: Option<&dyn ProgressObserver>,
    ) -> Vec<MatchResult> {
        let total: usize = candidates.len();
        if total == 0 {
            return Vec::new();
        }

        info!("Checking {total} candidates with {} workers", self.concurrency);

        let permits = Arc::new(Semaphore::new(self.concurrency));
        let mut units: JoinSet<Option<(usize, MatchResult)>> = JoinSet::new();

        for (idx, candidate) in candidates.into_iter().enumerate() {
            let permits = permits.clone();
            let resolver = self.resolver.clone();
            let table = self.table.clone();

            units.spawn(async move {
                let Ok(_permit) = permits.acquire_owned().await else {
                    return None;
                };
                let outcome = resolver.resolve(&candidate).await;
                classifier::classify(&table, &candidate, &outcome).map(|hit| (idx, hit))
            });
        }

        let mut matches: Vec<(usize, MatchResult)> = Vec::new();
        let mut completed: usize = 0;

        while let Some(joined) = units.join_next().await {
            completed += 1;
            match joined {
                Ok(Some(hit)) => {
                    debug!("{}", hit.1);
                    matches.push(hit);
                }
                Ok(None) => {}
                Err(e) => warn!("A candidate check aborted: {e}"),
            }
            if let Some(observer) = observer {
                observer.on_progress(completed, total);
            }
        }

        matches.sort_by_key(|(idx, _)| *idx);
        matches.into_iter().map(|(_, hit)| hit).collect()
    }
}
