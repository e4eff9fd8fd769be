use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use nimbus_common::cloud::{candidate::Candidate, matches::MatchResult, patterns::PatternTable};
use nimbus_common::config::Config;
use nimbus_core::pipeline::CloudPipeline;
use nimbus_core::resolver::SystemResolver;
use tracing::{Instrument, info_span};

use crate::input::InputSource;
use crate::output;
use crate::terminal::{print, progress::SpanProgress};

pub async fn check(
    source: InputSource,
    destination: Option<&Path>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let candidates: Vec<Candidate> = load_candidates(&source, cfg)?;
    let total: usize = candidates.len();

    let resolver = Arc::new(SystemResolver::new(cfg.resolve_timeout));
    let table = Arc::new(PatternTable::cloud_defaults());
    let pipeline = CloudPipeline::from_config(resolver, table, cfg);

    print::header("checking cloud exposure", cfg.quiet);
    print::status("Processing subdomains concurrently...", cfg.quiet);

    let span = info_span!("check", indicatif.pb_show = true);
    let progress = SpanProgress::new(span.clone(), total);

    let start_time: Instant = Instant::now();
    let matches: Vec<MatchResult> = pipeline
        .run(candidates, Some(&progress))
        .instrument(span)
        .await;

    report(&matches, destination, cfg)?;
    print::summary(matches.len(), total, start_time.elapsed(), cfg.quiet);
    Ok(())
}

fn load_candidates(source: &InputSource, cfg: &Config) -> anyhow::Result<Vec<Candidate>> {
    match source {
        InputSource::File(path) => {
            print::status(format!("Reading subdomains from {}...", path.display()), cfg.quiet)
        }
        InputSource::Domain(domain) => {
            print::status(format!("Processing single domain: {domain}"), cfg.quiet)
        }
    }

    let candidates: Vec<Candidate> = source.load()?;
    print::status(format!("Loaded {} candidates", candidates.len()), cfg.quiet);
    Ok(candidates)
}

fn report(matches: &[MatchResult], destination: Option<&Path>, cfg: &Config) -> anyhow::Result<()> {
    if let Some(path) = destination {
        print::status(format!("Writing results to {}...", path.display()), cfg.quiet);
        output::write_to_file(path, matches)
            .with_context(|| format!("saving results to {}", path.display()))?;
        print::success("Results saved to file.", cfg.quiet);
        return Ok(());
    }

    if matches.is_empty() {
        print::no_results(cfg.quiet);
        return Ok(());
    }

    print::header("subdomains pointing to cloud services", cfg.quiet);
    output::write_to_stdout(matches).context("printing results")?;
    Ok(())
}
