#![forbid(unsafe_code)]

use clap::{CommandFactory, Parser};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

pub mod cli;
pub mod error;
pub mod hash;
pub mod output;

use cli::{Cli, Outcome, exit_code};
use error::ChecksumError;
use hash::StreamerConfig;

/// Main entry point that handles all errors internally and returns exit code
pub fn run() -> u8 {
    run_with_cli(Cli::parse())
}

pub fn run_with_cli(cli: Cli) -> u8 {
    let Some(file) = cli.file.as_deref() else {
        // Usage goes to stdout; exiting non-zero so scripts can tell
        // "no work requested" apart from success.
        let _ = Cli::command().print_help();
        return exit_code(Outcome::Usage);
    };

    match execute(file, cli.jsonout) {
        Ok(()) => exit_code(Outcome::Success),
        Err(error) => {
            eprintln!("checksum-calc: {error}");
            exit_code(Outcome::Failure)
        }
    }
}

fn execute(path: &Path, jsonout: bool) -> Result<(), ChecksumError> {
    let absolute = std::path::absolute(path).map_err(|source| ChecksumError::Resolve {
        path: path.to_path_buf(),
        source,
    })?;
    let file = File::open(&absolute).map_err(|source| ChecksumError::Open {
        path: absolute.clone(),
        source,
    })?;

    if !jsonout {
        println!("Computing checksums...");
    }

    let digests = hash::compute_checksums(file, &StreamerConfig::default())?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if jsonout {
        let report = output::ChecksumReport::from_digests(&digests);
        output::write_json(&mut handle, &report).map_err(ChecksumError::Report)?;
    } else {
        output::write_report(&mut handle, &digests).map_err(ChecksumError::Report)?;
    }
    handle.flush().map_err(ChecksumError::Report)?;

    Ok(())
}
