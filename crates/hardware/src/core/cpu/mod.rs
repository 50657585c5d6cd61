//! CPU Core Definition and Initialization.
//!
//! This module defines the `Cpu` structure, which holds the complete
//! architectural state of the E20:
//! 1. **Registers:** Eight 16-bit general-purpose registers.
//! 2. **Memory:** 8192 words of main memory.
//! 3. **Program Counter:** 16 bits wide; only the low 13 bits select a word.
//!
//! The state is an owned value threaded through the simulation loop, so any
//! number of independent machines can coexist.

/// Instruction execution.
pub mod execution;

/// Word-addressed main memory.
pub mod memory;

use crate::common::ADDR_MASK;
use crate::core::arch::Gpr;
use crate::isa::Decoded;

pub use self::memory::Memory;

/// Architectural state of an E20 machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: Gpr,
    /// Program counter.
    pub pc: u16,
    /// Main memory.
    pub memory: Memory,
}

impl Cpu {
    /// Creates a machine with zeroed registers and memory and `pc = 0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a machine whose memory is initialized from `image`.
    pub fn with_image(image: &[u16]) -> Self {
        Self {
            memory: Memory::from_image(image),
            ..Self::default()
        }
    }

    /// Address of the word the program counter currently selects.
    #[inline]
    pub const fn fetch_addr(&self) -> u16 {
        self.pc & ADDR_MASK
    }

    /// Fetches the instruction word at the program counter.
    #[inline]
    pub fn fetch(&self) -> u16 {
        self.memory.read(self.fetch_addr())
    }

    /// Effective address of a load or store: `(rA + imm) mod 8192`.
    #[inline]
    pub fn effective_address(&self, d: &Decoded) -> u16 {
        self.regs.read(d.ra).wrapping_add(d.imm) & ADDR_MASK
    }
}
