//! Text encodings supported for configuration files.
//!
//! Responsibilities:
//! - Enumerate the encodings the loader can decode.
//! - Decode raw file bytes into text before INI parsing.
//!
//! Does NOT handle:
//! - File I/O (see `loader::builder`).
//! - Error reporting with path context (the loader wraps a failed decode
//!   into `ConfigError::Decode`).
//!
//! Invariants:
//! - `Encoding` is `Copy + Eq + Hash` so it can participate in the
//!   memoization cache key alongside the file path.
//! - Latin-1 decoding cannot fail; every byte maps to a scalar value.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Text encoding used to decode a configuration file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// UTF-8, the default.
    #[default]
    Utf8,
    /// ISO 8859-1, a single-byte encoding where each byte is the
    /// corresponding Unicode scalar value.
    Latin1,
}

impl Encoding {
    /// Decode raw bytes with this encoding.
    ///
    /// Returns `None` when the bytes are not valid for the encoding.
    pub(crate) fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Self::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            Self::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utf8 => f.write_str("utf-8"),
            Self::Latin1 => f.write_str("latin-1"),
        }
    }
}

/// Error returned when an encoding label is not recognized.
#[derive(Debug, Error)]
#[error("unknown encoding label: {0}")]
pub struct UnknownEncoding(String);

impl FromStr for Encoding {
    type Err = UnknownEncoding;

    /// Accepts the common labels for each supported encoding,
    /// case-insensitively (e.g. "utf-8", "UTF8", "latin-1", "iso-8859-1").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" => Ok(Self::Latin1),
            other => Err(UnknownEncoding(other.to_string())),
        }
    }
}
