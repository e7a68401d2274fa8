use serde::Serialize;
use std::io::{self, Write};

use crate::cli::Algorithm;
use crate::hash::DigestSet;

/// JSON report with a fixed field set, regardless of which algorithms
/// were configured. An algorithm missing from the digest set renders as
/// an empty string.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChecksumReport {
    #[serde(rename = "Md5")]
    pub md5: String,
    #[serde(rename = "Sha256")]
    pub sha256: String,
    #[serde(rename = "Sha1")]
    pub sha1: String,
}

impl ChecksumReport {
    pub fn from_digests(digests: &DigestSet) -> Self {
        let digest_or_empty = |algorithm: Algorithm| {
            digests
                .get(algorithm)
                .map(str::to_owned)
                .unwrap_or_default()
        };

        Self {
            md5: digest_or_empty(Algorithm::Md5),
            sha256: digest_or_empty(Algorithm::Sha256),
            sha1: digest_or_empty(Algorithm::Sha1),
        }
    }
}

pub fn write_json<W: Write>(writer: &mut W, report: &ChecksumReport) -> io::Result<()> {
    serde_json::to_writer(&mut *writer, report).map_err(io::Error::other)?;
    writer.write_all(b"\n")
}
