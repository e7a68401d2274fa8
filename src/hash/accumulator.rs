use md5::{Digest, Md5};
use sha1::Sha1;
use sha2::Sha256;

use crate::cli::Algorithm;

/// Running hash state for a single algorithm.
///
/// Created fresh per computation, fed sequential chunks via [`update`],
/// and consumed by [`finalize`]. Taking `self` by value makes a second
/// finalize (or a write after finalize) unrepresentable.
///
/// [`update`]: Accumulator::update
/// [`finalize`]: Accumulator::finalize
pub enum Accumulator {
    Md5(Md5),
    Sha1(Sha1),
    Sha256(Sha256),
}

impl Accumulator {
    pub fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Md5 => Self::Md5(Md5::new()),
            Algorithm::Sha1 => Self::Sha1(Sha1::new()),
            Algorithm::Sha256 => Self::Sha256(Sha256::new()),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Md5(_) => Algorithm::Md5,
            Self::Sha1(_) => Algorithm::Sha1,
            Self::Sha256(_) => Algorithm::Sha256,
        }
    }

    /// Add a chunk to the running hash.
    pub fn update(&mut self, chunk: &[u8]) {
        match self {
            Self::Md5(hasher) => hasher.update(chunk),
            Self::Sha1(hasher) => hasher.update(chunk),
            Self::Sha256(hasher) => hasher.update(chunk),
        }
    }

    /// Finish the computation and render the digest as uppercase hex.
    pub fn finalize(self) -> String {
        match self {
            Self::Md5(hasher) => format!("{:X}", hasher.finalize()),
            Self::Sha1(hasher) => format!("{:X}", hasher.finalize()),
            Self::Sha256(hasher) => format!("{:X}", hasher.finalize()),
        }
    }
}
