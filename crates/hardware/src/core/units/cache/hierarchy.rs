//! Cache Hierarchy.
//!
//! Owns zero, one, or two cache levels. Every access goes to L1; an L1 miss
//! repeats the access on L2 before L1 installs its own fill, and stores are
//! written through to L2. L2 never cascades further. A level that is absent
//! (not configured, or configured with no rows) turns its accesses into
//! no-ops.

use tracing::{debug, warn};

use super::log::{AccessKind, AccessSink};
use super::{Cache, LevelName};
use crate::common::ConfigError;
use crate::config::{CacheConfig, HierarchyConfig};

/// L1 with an optional L2 beneath it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheHierarchy {
    l1: Option<Cache>,
    l2: Option<Cache>,
}

impl CacheHierarchy {
    /// Builds the hierarchy described by `config`.
    ///
    /// An L2 below an L1 that yields no rows is unreachable and is dropped
    /// with a warning, as is any level whose geometry yields no rows.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingL1`] if an L2 is given without an L1, and
    /// [`ConfigError::ZeroParameter`] if an enabled level has a zero
    /// associativity or blocksize.
    pub fn new(config: &HierarchyConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let l1 = config.l1.and_then(|c| build_level(LevelName::L1, c));
        let l2 = match (&l1, config.l2) {
            (None, Some(_)) => {
                warn!("L1 is disabled; ignoring L2");
                None
            }
            (_, c) => c.and_then(|c| build_level(LevelName::L2, c)),
        };

        Ok(Self { l1, l2 })
    }

    /// Hierarchy with no cache levels. Every access is a no-op.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Upper level, if enabled.
    pub const fn l1(&self) -> Option<&Cache> {
        self.l1.as_ref()
    }

    /// Lower level, if enabled.
    pub const fn l2(&self) -> Option<&Cache> {
        self.l2.as_ref()
    }

    /// Enabled levels, upper first.
    pub fn levels(&self) -> impl Iterator<Item = &Cache> {
        self.l1.iter().chain(self.l2.iter())
    }

    /// Records a load from `addr` issued at `pc`.
    ///
    /// # Returns
    ///
    /// The L1 classification, or `None` when no L1 is configured.
    pub fn read(&mut self, pc: u16, addr: u16, sink: &mut dyn AccessSink) -> Option<AccessKind> {
        let l1 = self.l1.as_mut()?;
        Some(l1.read(pc, addr, self.l2.as_mut(), sink))
    }

    /// Records a store to `addr` issued at `pc`.
    pub fn write(&mut self, pc: u16, addr: u16, sink: &mut dyn AccessSink) {
        if let Some(l1) = self.l1.as_mut() {
            l1.write(pc, addr, self.l2.as_mut(), sink);
        }
    }
}

fn build_level(name: LevelName, config: CacheConfig) -> Option<Cache> {
    let cache = Cache::new(name, config);
    match &cache {
        Some(c) => debug!(
            level = %name,
            size = config.size,
            associativity = config.associativity,
            blocksize = config.blocksize,
            rows = c.num_rows(),
            "cache level enabled"
        ),
        None if config.size > 0 => {
            warn!(level = %name, %config, "cache geometry yields no rows; level disabled");
        }
        None => {}
    }
    cache
}
