//! Configuration system for the E20 simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline cache geometry when a field is omitted.
//! 2. **Structures:** General settings and the cache hierarchy geometry.
//! 3. **Parsing:** The comma-separated cache argument string
//!    (`size,associativity,blocksize[,size,associativity,blocksize]`) and JSON
//!    documents.
//!
//! Configuration is supplied on the command line or as JSON; use
//! `Config::default()` for a cacheless machine.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::common::ConfigError;
use crate::core::units::cache::LevelName;

/// Default configuration constants for the simulator.
mod defaults {
    /// Default cache associativity (1 way = direct-mapped).
    pub const CACHE_WAYS: usize = 1;

    /// Default cache block size (one addressable word).
    pub const CACHE_BLOCK: usize = 1;
}

/// Number of values in one `size,associativity,blocksize` triple.
const TRIPLE_LEN: usize = 3;

/// Root configuration structure for the simulator.
///
/// # Examples
///
/// ```
/// use e20sim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "cache": {
///         "l1": { "size": 8, "associativity": 2, "blocksize": 2 },
///         "l2": { "size": 32, "associativity": 4, "blocksize": 2 }
///     }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.cache.l1.unwrap().num_rows(), 2);
/// assert_eq!(config.cache.l2.unwrap().num_rows(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General simulation settings
    pub general: GeneralConfig,
    /// Cache hierarchy configuration
    pub cache: HierarchyConfig,
}

impl Config {
    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed documents and
    /// [`ConfigError::ZeroParameter`] for invalid cache geometry.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration for values the simulator cannot use.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroParameter`] for invalid cache geometry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cache.validate()
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `trace` event with the disassembly of every executed instruction.
    #[serde(default)]
    pub trace_instructions: bool,
}

/// Cache hierarchy configuration.
///
/// A level left as `None` is disabled. An L2 is only reachable through an L1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct HierarchyConfig {
    /// Upper cache level
    #[serde(default)]
    pub l1: Option<CacheConfig>,
    /// Lower cache level
    #[serde(default)]
    pub l2: Option<CacheConfig>,
}

impl HierarchyConfig {
    /// Configured levels, upper first.
    pub fn levels(&self) -> impl Iterator<Item = (LevelName, CacheConfig)> {
        self.l1
            .map(|c| (LevelName::L1, c))
            .into_iter()
            .chain(self.l2.map(|c| (LevelName::L2, c)))
    }

    /// Checks the level structure and every enabled level's geometry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingL1`] for an L2 with no L1, and
    /// [`ConfigError::ZeroParameter`] if a level with a non-zero size has a
    /// zero associativity or blocksize.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.l1.is_none() && self.l2.is_some() {
            return Err(ConfigError::MissingL1);
        }
        self.levels().try_for_each(|(level, c)| c.validate(level))
    }
}

impl FromStr for HierarchyConfig {
    type Err = ConfigError;

    /// Parses `size,associativity,blocksize` for L1, optionally followed by a
    /// second triple for L2.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ConfigError::ArgumentCount(0));
        }

        let values = s
            .split(',')
            .map(|field| {
                let field = field.trim();
                field
                    .parse::<usize>()
                    .map_err(|_| ConfigError::InvalidNumber(field.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut triples = values.chunks_exact(TRIPLE_LEN).map(CacheConfig::from_triple);
        let config = match values.len() {
            3 | 6 => Self {
                l1: triples.next(),
                l2: triples.next(),
            },
            n => return Err(ConfigError::ArgumentCount(n)),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Individual cache level configuration. All sizes are in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CacheConfig {
    /// Total cache size
    pub size: usize,

    /// Associativity (blocks per row)
    #[serde(default = "CacheConfig::default_ways")]
    pub associativity: usize,

    /// Block size
    #[serde(default = "CacheConfig::default_block")]
    pub blocksize: usize,
}

impl CacheConfig {
    /// Creates a cache geometry.
    pub const fn new(size: usize, associativity: usize, blocksize: usize) -> Self {
        Self {
            size,
            associativity,
            blocksize,
        }
    }

    /// Builds a geometry from a `[size, associativity, blocksize]` slice.
    fn from_triple(triple: &[usize]) -> Self {
        Self::new(triple[0], triple[1], triple[2])
    }

    /// Returns the default cache associativity (number of ways).
    const fn default_ways() -> usize {
        defaults::CACHE_WAYS
    }

    /// Returns the default block size.
    const fn default_block() -> usize {
        defaults::CACHE_BLOCK
    }

    /// Number of rows: `size / (associativity * blocksize)`.
    ///
    /// Zero when the geometry is degenerate; such a level is disabled.
    pub const fn num_rows(&self) -> usize {
        match self.associativity.checked_mul(self.blocksize) {
            Some(row_bytes) if row_bytes > 0 => self.size / row_bytes,
            _ => 0,
        }
    }

    /// Checks that an enabled level can be indexed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroParameter`] naming the first zero field.
    pub fn validate(&self, level: LevelName) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Ok(());
        }
        if self.associativity == 0 {
            return Err(ConfigError::ZeroParameter {
                level,
                field: "associativity",
            });
        }
        if self.blocksize == 0 {
            return Err(ConfigError::ZeroParameter {
                level,
                field: "blocksize",
            });
        }
        Ok(())
    }
}

impl fmt::Display for CacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "size {}, associativity {}, blocksize {}, rows {}",
            self.size,
            self.associativity,
            self.blocksize,
            self.num_rows()
        )
    }
}
