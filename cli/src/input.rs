//! Candidate acquisition: a file with one name per line, or a single name.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use nimbus_common::cloud::candidate::Candidate;
use nimbus_common::error::InputError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Domain(String),
}

impl InputSource {
    /// Picks the input mode; exactly one of `file` and `domain` must be given.
    pub fn from_args(file: Option<&Path>, domain: Option<&str>) -> Result<Self, InputError> {
        match (file, domain) {
            (Some(_), Some(_)) => Err(InputError::ConflictingSources),
            (Some(path), None) => Ok(InputSource::File(path.to_path_buf())),
            (None, Some(domain)) => Ok(InputSource::Domain(domain.trim().to_string())),
            (None, None) => Err(InputError::NoSource),
        }
    }

    pub fn load(&self) -> Result<Vec<Candidate>, InputError> {
        match self {
            InputSource::File(path) => read_candidates(path),
            InputSource::Domain(domain) => Ok(vec![Candidate::new(domain.as_str())]),
        }
    }
}

pub fn read_candidates(path: &Path) -> Result<Vec<Candidate>, InputError> {
    let content: String = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => InputError::FileNotFound(path.to_path_buf()),
        _ => InputError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;
    Ok(parse_candidates(&content))
}

/// Trims every line and drops the blank ones. Duplicates are kept.
pub fn parse_candidates(content: &str) -> Vec<Candidate> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Candidate::from)
        .collect()
}
