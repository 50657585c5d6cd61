//! Set-Associative Cache Simulator.
//!
//! This module models the E20 cache hierarchy. It provides:
//! 1. **Levels:** [`Cache`], a set-associative level named `L1` or `L2`.
//! 2. **Sets:** [`set::CacheSet`], blocks plus a per-set logical clock for LRU.
//! 3. **Hierarchy:** [`hierarchy::CacheHierarchy`], an optional L1 with an
//!    optional L2 beneath it.
//! 4. **Logging:** [`log::AccessEntry`] records emitted for every access.
//!
//! Only hit/miss classification and resulting cache state are modelled; the
//! caches hold no data and add no latency.
//!
//! Addresses map to sets with the usual split:
//! `block = addr / blocksize`, `row = block % rows`, `tag = block / rows`.

/// Two-level cache hierarchy with inclusive miss cascading.
pub mod hierarchy;

/// Access log entries and sinks.
pub mod log;

/// Cache sets, blocks, and LRU victim selection.
pub mod set;

use std::fmt;

use serde::Deserialize;

use self::log::{AccessEntry, AccessKind, AccessSink};
use self::set::{CacheSet, Probe};
use crate::config::CacheConfig;

pub use self::hierarchy::CacheHierarchy;

/// Name of a cache level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum LevelName {
    /// Upper level, consulted first.
    L1,
    /// Lower level, consulted on L1 misses.
    L2,
}

impl fmt::Display for LevelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::L1 => "L1",
            Self::L2 => "L2",
        })
    }
}

/// One set-associative cache level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cache {
    name: LevelName,
    config: CacheConfig,
    rows: Vec<CacheSet>,
}

impl Cache {
    /// Creates a cache level from its geometry.
    ///
    /// Returns `None` when the geometry yields no rows (for example a size of
    /// zero); such a level is disabled. Associativity and blocksize must be
    /// non-zero, which [`CacheConfig::validate`] checks.
    pub fn new(name: LevelName, config: CacheConfig) -> Option<Self> {
        let num_rows = config.num_rows();
        if num_rows == 0 {
            return None;
        }
        Some(Self {
            name,
            config,
            rows: (0..num_rows)
                .map(|_| CacheSet::new(config.associativity))
                .collect(),
        })
    }

    /// Level name.
    pub const fn name(&self) -> LevelName {
        self.name
    }

    /// Geometry this level was built from.
    pub const fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Number of sets.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Set at `row`.
    pub fn row(&self, row: usize) -> &CacheSet {
        &self.rows[row]
    }

    /// Splits an address into `(row, tag)`.
    #[inline]
    pub fn locate(&self, addr: u16) -> (usize, usize) {
        let block_id = usize::from(addr) / self.config.blocksize;
        let rows = self.rows.len();
        (block_id % rows, block_id / rows)
    }

    /// Returns true if a valid block holding `addr` is present.
    ///
    /// Inspection only: does not advance the set clock or log anything.
    pub fn contains(&self, addr: u16) -> bool {
        let (row, tag) = self.locate(addr);
        self.rows[row]
            .blocks()
            .iter()
            .any(|b| b.valid && b.tag == tag)
    }

    /// Records a read of `addr` issued by the instruction at `pc`.
    ///
    /// Scans the set in storage order. A matching tag met before any invalid
    /// block is a hit and only refreshes that block's stamp. Otherwise the
    /// read misses: the miss is logged, the read is repeated on `next` (its
    /// outcome logged by that level), and the tag is installed into the first
    /// invalid block or over the LRU victim.
    ///
    /// # Returns
    ///
    /// [`AccessKind::Hit`] or [`AccessKind::Miss`] for this level.
    pub fn read(
        &mut self,
        pc: u16,
        addr: u16,
        next: Option<&mut Self>,
        sink: &mut dyn AccessSink,
    ) -> AccessKind {
        let (row, tag) = self.locate(addr);
        let set = &mut self.rows[row];
        let stamp = set.tick();

        let empty = match set.probe(tag) {
            Probe::Hit(way) => {
                set.touch(way, stamp);
                sink.record(self.entry(AccessKind::Hit, pc, addr, row));
                return AccessKind::Hit;
            }
            Probe::Miss { empty } => empty,
        };

        sink.record(self.entry(AccessKind::Miss, pc, addr, row));

        if let Some(lower) = next {
            let _ = lower.read(pc, addr, None, sink);
        }

        let _ = self.rows[row].fill_or_evict(empty, tag, stamp);
        AccessKind::Miss
    }

    /// Records a write of `addr` issued by the instruction at `pc`.
    ///
    /// Writes are logged unclassified. The tag is allocated into the first
    /// invalid block if one exists, without looking for a matching tag; the
    /// write is then repeated on `next`; with no invalid block the LRU victim
    /// is overwritten.
    pub fn write(
        &mut self,
        pc: u16,
        addr: u16,
        next: Option<&mut Self>,
        sink: &mut dyn AccessSink,
    ) {
        let (row, tag) = self.locate(addr);
        let stamp = self.rows[row].tick();

        sink.record(self.entry(AccessKind::Write, pc, addr, row));

        let empty = self.rows[row].first_invalid();
        if let Some(way) = empty {
            self.rows[row].fill(way, tag, stamp);
        }

        if let Some(lower) = next {
            lower.write(pc, addr, None, sink);
        }

        if empty.is_none() {
            let _ = self.rows[row].fill_or_evict(None, tag, stamp);
        }
    }

    const fn entry(&self, kind: AccessKind, pc: u16, addr: u16, row: usize) -> AccessEntry {
        AccessEntry {
            level: self.name,
            kind,
            pc,
            addr,
            row,
        }
    }
}
