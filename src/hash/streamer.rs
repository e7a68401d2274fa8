use std::io::{self, BufRead, BufReader, Read};

use super::accumulator::Accumulator;
use crate::cli::Algorithm;

/// Default chunk size for reading the source, 1 MiB.
pub const DEFAULT_BUF_SIZE: usize = 1024 * 1024;

/// Configuration for one streaming pass: which algorithms to run and
/// how large the read buffer is.
#[derive(Debug, Clone)]
pub struct StreamerConfig {
    pub algorithms: Vec<Algorithm>,
    pub buf_size: usize,
}

impl Default for StreamerConfig {
    fn default() -> Self {
        Self {
            algorithms: Algorithm::ALL.to_vec(),
            buf_size: DEFAULT_BUF_SIZE,
        }
    }
}

/// Immutable result of a completed pass: one uppercase hex digest per
/// configured algorithm, in configuration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestSet {
    entries: Vec<(Algorithm, String)>,
}

impl DigestSet {
    pub fn get(&self, algorithm: Algorithm) -> Option<&str> {
        self.entries
            .iter()
            .find(|(entry_algorithm, _)| *entry_algorithm == algorithm)
            .map(|(_, digest)| digest.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Algorithm, &str)> {
        self.entries
            .iter()
            .map(|(algorithm, digest)| (*algorithm, digest.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read `reader` to exhaustion in one forward pass, feeding every chunk
/// to one accumulator per configured algorithm.
///
/// Every accumulator sees byte-identical input in source order. A read
/// error aborts the whole computation; no partial `DigestSet` escapes
/// the error path. The source is never rewound or re-read, so
/// non-seekable readers (pipes) work.
pub fn compute_checksums<R: Read>(reader: R, config: &StreamerConfig) -> io::Result<DigestSet> {
    let mut accumulators: Vec<Accumulator> = config
        .algorithms
        .iter()
        .map(|algorithm| Accumulator::new(*algorithm))
        .collect();

    let mut reader = BufReader::with_capacity(config.buf_size.max(1), reader);
    loop {
        let chunk_len = {
            let chunk = reader.fill_buf()?;
            if chunk.is_empty() {
                break;
            }
            for accumulator in &mut accumulators {
                accumulator.update(chunk);
            }
            chunk.len()
        };
        reader.consume(chunk_len);
    }

    let entries = accumulators
        .into_iter()
        .map(|accumulator| (accumulator.algorithm(), accumulator.finalize()))
        .collect();

    Ok(DigestSet { entries })
}
