//! Result sink: an output file or standard output, written once after the run.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use nimbus_common::cloud::matches::MatchResult;
use nimbus_common::error::OutputError;

/// Writes one `"<candidate> points to <provider>"` line per match.
pub fn write_lines<W: Write>(mut writer: W, matches: &[MatchResult]) -> io::Result<()> {
    for hit in matches {
        writeln!(writer, "{hit}")?;
    }
    writer.flush()
}

pub fn write_to_file(path: &Path, matches: &[MatchResult]) -> Result<(), OutputError> {
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_lines(BufWriter::new(file), matches)?;
    Ok(())
}

pub fn write_to_stdout(matches: &[MatchResult]) -> Result<(), OutputError> {
    let stdout = io::stdout();
    write_lines(stdout.lock(), matches)?;
    Ok(())
}
