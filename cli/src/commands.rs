pub mod check;

use std::path::PathBuf;

use clap::Parser;
use nimbus_common::config::{Config, DEFAULT_CONCURRENCY};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "nimbus")]
#[command(version)]
#[command(about = "Check whether subdomains or a domain point to cloud services.")]
pub struct CommandLine {
    /// File containing a list of subdomains, one per line
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// A single domain to check
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Optional output file to save results
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of lookups in flight at once
    #[arg(short, long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Seconds a single lookup may take before it counts as unresolved
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Reduce output; repeat for results only
    #[arg(short, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            quiet: self.quiet.min(2),
            no_banner: self.no_banner,
            ..Config::default()
        }
        .with_concurrency(self.concurrency)
        .with_resolve_timeout(Duration::from_secs(self.timeout))
    }
}
