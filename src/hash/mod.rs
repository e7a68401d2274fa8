pub mod accumulator;
pub mod streamer;

pub use streamer::{DEFAULT_BUF_SIZE, DigestSet, StreamerConfig, compute_checksums};
