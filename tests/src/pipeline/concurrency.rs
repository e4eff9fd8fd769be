#![cfg(test)]
use std::sync::Arc;
use std::time::Duration;

use nimbus_common::cloud::patterns::PatternTable;
use nimbus_common::config::Config;
use nimbus_core::pipeline::CloudPipeline;
use tokio::sync::Semaphore;

use crate::utils::{candidates, CountingResolver, RecordingObserver};

fn batch(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("host{i}.cloudfront.net")).collect()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn never_exceeds_concurrency_limit() {
    let resolver = Arc::new(CountingResolver::new(Duration::from_millis(20)));
    let pipeline = CloudPipeline::new(resolver.clone(), Arc::new(PatternTable::cloud_defaults()), 3);

    let names = batch(12);
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let matches = pipeline.run(candidates(&refs), None).await;

    assert_eq!(matches.len(), 12);
    assert_eq!(resolver.calls(), 12);
    assert!(resolver.peak() <= 3, "Peak concurrency was {}", resolver.peak());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn default_config_uses_ten_slots() {
    let resolver = Arc::new(CountingResolver::new(Duration::from_millis(20)));
    let pipeline = CloudPipeline::from_config(
        resolver.clone(),
        Arc::new(PatternTable::cloud_defaults()),
        &Config::default(),
    );
    assert_eq!(pipeline.concurrency(), 10);

    let names = batch(30);
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let observer = RecordingObserver::default();
    pipeline.run(candidates(&refs), Some(&observer)).await;

    assert!(resolver.peak() <= 10, "Peak concurrency was {}", resolver.peak());
    assert_eq!(observer.events().len(), 30);
}

#[tokio::test]
async fn single_slot_runs_sequentially() {
    let resolver = Arc::new(CountingResolver::new(Duration::from_millis(2)));
    let pipeline = CloudPipeline::new(resolver.clone(), Arc::new(PatternTable::cloud_defaults()), 0);
    assert_eq!(pipeline.concurrency(), 1);

    let names = batch(5);
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    pipeline.run(candidates(&refs), None).await;

    assert_eq!(resolver.peak(), 1);
}

#[tokio::test]
async fn oversized_limit_is_capped_to_semaphore_maximum() {
    let resolver = Arc::new(CountingResolver::new(Duration::from_millis(1)));
    let cfg = Config::default().with_concurrency(usize::MAX);
    let pipeline = CloudPipeline::from_config(
        resolver.clone(),
        Arc::new(PatternTable::cloud_defaults()),
        &cfg,
    );
    assert_eq!(pipeline.concurrency(), Semaphore::MAX_PERMITS);

    let matches = pipeline.run(candidates(&["a.appspot.com"]), None).await;
    assert_eq!(matches.len(), 1);
    assert_eq!(resolver.calls(), 1);
}
