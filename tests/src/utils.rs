#![cfg(test)]
//! Scripted resolvers and observers for driving the pipeline without real DNS.

use std::collections::HashSet;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use nimbus_common::cloud::candidate::Candidate;
use nimbus_common::progress::ProgressObserver;
use nimbus_common::resolving::{ResolutionOutcome, Resolver};

pub const DOC_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1));

/// Resolves everything except the listed names; panics on the `panicking` ones.
#[derive(Default)]
pub struct ScriptedResolver {
    failing: HashSet<String>,
    panicking: HashSet<String>,
    delay: Option<Duration>,
}

impl ScriptedResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(mut self, names: &[&str]) -> Self {
        self.failing.extend(names.iter().map(|n| n.to_string()));
        self
    }

    pub fn panicking(mut self, names: &[&str]) -> Self {
        self.panicking.extend(names.iter().map(|n| n.to_string()));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl Resolver for ScriptedResolver {
    async fn resolve(&self, candidate: &Candidate) -> ResolutionOutcome {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.panicking.contains(candidate.as_str()) {
            panic!("resolver blew up on {candidate}");
        }
        if self.failing.contains(candidate.as_str()) {
            return ResolutionOutcome::Unresolved;
        }
        ResolutionOutcome::Resolved(DOC_ADDR)
    }
}

/// Tracks how many lookups are inside `resolve` at the same time.
pub struct CountingResolver {
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    calls: AtomicUsize,
    hold: Duration,
}

impl CountingResolver {
    pub fn new(hold: Duration) -> Self {
        Self {
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
            hold,
        }
    }

    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Resolver for CountingResolver {
    async fn resolve(&self, _candidate: &Candidate) -> ResolutionOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);

        tokio::time::sleep(self.hold).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        ResolutionOutcome::Resolved(DOC_ADDR)
    }
}

/// Records every `(completed, total)` pair it is handed.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<(usize, usize)>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<(usize, usize)> {
        self.events.lock().unwrap().clone()
    }
}

impl ProgressObserver for RecordingObserver {
    fn on_progress(&self, completed: usize, total: usize) {
        self.events.lock().unwrap().push((completed, total));
    }
}

pub fn candidates(names: &[&str]) -> Vec<Candidate> {
    names.iter().map(|n| Candidate::from(*n)).collect()
}
