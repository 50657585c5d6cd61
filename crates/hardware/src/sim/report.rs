//! Final state report.
//!
//! A [`FinalState`] is a read-only snapshot of the machine taken after the
//! simulation halts. Its `Display` output is the simulator's final report:
//!
//! ```text
//! Final state:
//! 	pc=    3
//! 	$0=    0
//! 	...
//! 2005 4001 0000 0000 0000 0000 0000 0000
//! ```
//!
//! followed by 16 lines of 8 memory words in hexadecimal, each word followed
//! by a space.

use std::fmt;

use crate::common::constants::{REPORT_WORDS, REPORT_WORDS_PER_LINE};
use crate::common::NUM_REGS;
use crate::core::Cpu;

/// Snapshot of the architectural state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalState {
    /// Program counter.
    pub pc: u16,
    /// Register values, `$0` first.
    pub regs: [u16; NUM_REGS],
    /// Full memory contents.
    pub memory: Vec<u16>,
}

impl FinalState {
    /// Captures the state of `cpu`.
    pub fn capture(cpu: &Cpu) -> Self {
        Self {
            pc: cpu.pc,
            regs: cpu.regs.snapshot(),
            memory: cpu.memory.words().to_vec(),
        }
    }
}

impl fmt::Display for FinalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final state:")?;
        writeln!(f, "\tpc={:>5}", self.pc)?;
        for (i, val) in self.regs.iter().enumerate() {
            writeln!(f, "\t${i}={val:>5}")?;
        }
        let shown = REPORT_WORDS.min(self.memory.len());
        for line in self.memory[..shown].chunks(REPORT_WORDS_PER_LINE) {
            for word in line {
                write!(f, "{word:04x} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
