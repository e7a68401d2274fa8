use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong after argument parsing. Each variant
/// names the offending path or the underlying I/O cause; the top level
/// prints the message and exits, there is no retry.
#[derive(Debug, Error)]
pub enum ChecksumError {
    #[error("failed to resolve absolute path of '{path}': {source}")]
    Resolve { path: PathBuf, source: io::Error },

    #[error("failed to open '{path}': {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("read error while computing checksums: {0}")]
    Read(#[from] io::Error),

    #[error("failed to write report: {0}")]
    Report(io::Error),
}
