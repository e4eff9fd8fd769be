mod commands;
mod input;
mod output;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, check};
use input::InputSource;
use nimbus_common::config::Config;
use terminal::{logging, print};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    let cfg = commands.to_config();

    logging::init_logging(cfg.quiet);
    print::banner(cfg.no_banner, cfg.quiet);

    match run(&commands, &cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fatal(&e),
    }
}

async fn run(commands: &CommandLine, cfg: &Config) -> anyhow::Result<()> {
    let source = InputSource::from_args(commands.file.as_deref(), commands.domain.as_deref())?;
    check::check(source, commands.output.as_deref(), cfg).await
}

/// Reports a run-ending error through the error log.
fn fatal(err: &anyhow::Error) -> ExitCode {
    error!("Error: {err:#}");
    ExitCode::FAILURE
}
