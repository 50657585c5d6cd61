//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the E20 simulator. It provides:
//! 1. **Instruction mix:** Counts by category (ALU, load, store, jump, branch).
//! 2. **Control flow:** Conditional branches taken.
//! 3. **Cache hierarchy:** Read hits, read misses and writes for L1 and L2.

use std::fmt;

use crate::core::units::cache::LevelName;
use crate::core::units::cache::log::{AccessEntry, AccessKind};
use crate::isa::Opcode;

/// Access counters for one cache level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LevelStats {
    /// Reads that found their tag.
    pub hits: u64,
    /// Reads that did not find their tag.
    pub misses: u64,
    /// Writes observed.
    pub writes: u64,
}

impl LevelStats {
    /// Total classified reads.
    pub const fn reads(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of reads that hit, or `0.0` with no reads.
    pub fn hit_rate(&self) -> f64 {
        match self.reads() {
            0 => 0.0,
            reads => self.hits as f64 / reads as f64,
        }
    }
}

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Number of instructions executed (the halting jump is not counted).
    pub instructions_retired: u64,
    /// Count of three-register and immediate ALU instructions.
    pub inst_alu: u64,
    /// Count of `lw` instructions.
    pub inst_load: u64,
    /// Count of `sw` instructions.
    pub inst_store: u64,
    /// Count of `j`, `jal` and `jr` instructions.
    pub inst_jump: u64,
    /// Count of `jeq` instructions.
    pub inst_branch: u64,
    /// Count of unrecognized encodings executed as no-ops.
    pub inst_unknown: u64,
    /// Number of `jeq` instructions whose operands compared equal.
    pub branches_taken: u64,
    /// L1 cache counters.
    pub l1: LevelStats,
    /// L2 cache counters.
    pub l2: LevelStats,
}

impl SimStats {
    /// Creates zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one executed instruction.
    ///
    /// `taken` reports whether a `jeq` branched; it is ignored for other opcodes.
    pub const fn record_instruction(&mut self, op: Opcode, taken: bool) {
        self.instructions_retired += 1;
        match op {
            Opcode::Add
            | Opcode::Sub
            | Opcode::Or
            | Opcode::And
            | Opcode::Slt
            | Opcode::Addi
            | Opcode::Slti => self.inst_alu += 1,
            Opcode::Lw => self.inst_load += 1,
            Opcode::Sw => self.inst_store += 1,
            Opcode::J | Opcode::Jal | Opcode::Jr => self.inst_jump += 1,
            Opcode::Jeq => {
                self.inst_branch += 1;
                if taken {
                    self.branches_taken += 1;
                }
            }
            Opcode::Unknown => self.inst_unknown += 1,
        }
    }

    /// Counts one cache log entry against its level.
    pub const fn record_access(&mut self, entry: &AccessEntry) {
        let level = self.level_mut(entry.level);
        match entry.kind {
            AccessKind::Hit => level.hits += 1,
            AccessKind::Miss => level.misses += 1,
            AccessKind::Write => level.writes += 1,
        }
    }

    /// Counters for `level`.
    pub const fn level(&self, level: LevelName) -> &LevelStats {
        match level {
            LevelName::L1 => &self.l1,
            LevelName::L2 => &self.l2,
        }
    }

    const fn level_mut(&mut self, level: LevelName) -> &mut LevelStats {
        match level {
            LevelName::L1 => &mut self.l1,
            LevelName::L2 => &mut self.l2,
        }
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "E20 SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        writeln!(f, "  op.alu                 {}", self.inst_alu)?;
        writeln!(f, "  op.load                {}", self.inst_load)?;
        writeln!(f, "  op.store               {}", self.inst_store)?;
        writeln!(f, "  op.jump                {}", self.inst_jump)?;
        writeln!(
            f,
            "  op.branch              {} ({} taken)",
            self.inst_branch, self.branches_taken
        )?;
        writeln!(f, "  op.unknown             {}", self.inst_unknown)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "MEMORY HIERARCHY")?;
        for (name, level) in [(LevelName::L1, &self.l1), (LevelName::L2, &self.l2)] {
            writeln!(
                f,
                "  {name}  accesses: {:<8} hits: {:<8} misses: {:<8} writes: {:<8} hit_rate: {:.2}%",
                level.reads(),
                level.hits,
                level.misses,
                level.writes,
                level.hit_rate() * 100.0
            )?;
        }
        write!(f, "==========================================================")
    }
}
