use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Problems with where candidates come from. Always fatal for the run.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("either a file or a domain must be provided")]
    NoSource,
    #[error("please provide either a file or a domain, not both")]
    ConflictingSources,
    #[error("file '{}' not found", .0.display())]
    FileNotFound(PathBuf),
    #[error("failed to read '{}'", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Problems writing results to their destination.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create output file '{}'", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write results")]
    Write(#[from] io::Error),
}
