use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "checksum-calc")]
#[command(about = "Compute MD5 / SHA-1 / SHA-256 checksums of a file in one streaming pass")]
#[command(version)]
pub struct Cli {
    /// File to checksum. Ex: -f my-cd.iso
    #[arg(short = 'f', value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Dump JSON format output
    #[arg(long)]
    pub jsonout: bool,
}
