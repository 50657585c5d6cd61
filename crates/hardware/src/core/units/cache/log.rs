//! Cache access log.
//!
//! Every access to an enabled level appends exactly one [`AccessEntry`] to an
//! [`AccessSink`], in the order the accesses happen. Reads are classified as
//! hits or misses; writes are logged without classification.

use std::fmt;

use super::LevelName;

/// Classification of a logged access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessKind {
    /// Read whose tag was present.
    Hit,
    /// Read whose tag was absent.
    Miss,
    /// Store.
    Write,
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hit => "HIT",
            Self::Miss => "MISS",
            Self::Write => "SW",
        })
    }
}

/// One line of the cache access log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessEntry {
    /// Level that observed the access.
    pub level: LevelName,
    /// Hit, miss, or write.
    pub kind: AccessKind,
    /// Program counter of the instruction that issued the access.
    pub pc: u16,
    /// Accessed memory address.
    pub addr: u16,
    /// Set index the address maps to.
    pub row: usize,
}

impl fmt::Display for AccessEntry {
    /// Formats as `L1 MISS  pc:    4\taddr:  128\trow:   0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = format!("{} {}", self.level, self.kind);
        write!(
            f,
            "{tag:<8} pc:{:>5}\taddr:{:>5}\trow:{:>4}",
            self.pc, self.addr, self.row
        )
    }
}

/// Receiver of cache access log entries.
pub trait AccessSink {
    /// Records one access. Called in access order.
    fn record(&mut self, entry: AccessEntry);
}

impl AccessSink for Vec<AccessEntry> {
    fn record(&mut self, entry: AccessEntry) {
        self.push(entry);
    }
}

/// Sink that discards every entry.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl AccessSink for NullSink {
    fn record(&mut self, _entry: AccessEntry) {}
}
