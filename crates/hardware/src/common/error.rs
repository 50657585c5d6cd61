//! Configuration and loading errors.
//!
//! The simulator core (decode, execute, cache access) never fails. Errors only
//! arise where external input enters the system:
//! 1. **Configuration:** Cache geometry strings and JSON configuration files.
//! 2. **Program Loading:** Text images of binary instruction words.

use thiserror::Error;

use crate::core::units::cache::LevelName;

/// Errors raised while building a simulator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The cache configuration string did not hold one or two `size,associativity,blocksize` triples.
    #[error("expected 3 or 6 cache parameters, got {0}")]
    ArgumentCount(usize),

    /// A cache parameter was not an unsigned integer.
    #[error("invalid cache parameter '{0}'")]
    InvalidNumber(String),

    /// An enabled cache level has a zero associativity or blocksize.
    #[error("{level} {field} must be non-zero")]
    ZeroParameter {
        /// Level whose geometry is invalid.
        level: LevelName,
        /// Name of the offending parameter.
        field: &'static str,
    },

    /// An L2 was configured with no L1 above it.
    #[error("L2 cache configured without an L1")]
    MissingL1,

    /// A JSON configuration document could not be deserialized.
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while loading a program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image file could not be read.
    #[error("could not read program image: {0}")]
    Io(#[from] std::io::Error),

    /// A line did not carry a binary instruction word.
    #[error("line {line}: no binary instruction word in '{text}'")]
    MalformedLine {
        /// One-based line number.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },

    /// The image holds more words than main memory.
    #[error("program image exceeds {limit} words")]
    TooLarge {
        /// Capacity of main memory in words.
        limit: usize,
    },
}
