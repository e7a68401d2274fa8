use std::fmt;
use std::str::FromStr;

/// Checksum algorithms supported by the streamer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha256,
}

impl Algorithm {
    /// Declaration order doubles as report order, so output is
    /// deterministic across runs.
    pub const ALL: [Algorithm; 3] = [Self::Md5, Self::Sha1, Self::Sha256];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
        }
    }

    /// Digest output length in bytes.
    pub fn digest_len(&self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha256 => 32,
        }
    }

    /// Length of the hex rendering of a digest.
    pub fn hex_len(&self) -> usize {
        self.digest_len() * 2
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("md5") {
            Ok(Self::Md5)
        } else if s.eq_ignore_ascii_case("sha1") || s.eq_ignore_ascii_case("sha-1") {
            Ok(Self::Sha1)
        } else if s.eq_ignore_ascii_case("sha256") || s.eq_ignore_ascii_case("sha-256") {
            Ok(Self::Sha256)
        } else {
            Err(format!(
                "Invalid algorithm '{s}'. Expected one of: md5, sha1, sha256"
            ))
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
