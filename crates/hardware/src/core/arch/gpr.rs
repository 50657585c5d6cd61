//! E20 General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file. It performs the following:
//! 1. **Storage:** Maintains 8 registers of 16 bits (`$0`-`$7`).
//! 2. **Invariant Enforcement:** Ensures that register `$0` is hardwired to zero.
//!    Several instruction formats use `$0` as the "no destination" encoding, so
//!    writes to it are silently dropped.

use crate::common::NUM_REGS;

/// General-Purpose Register file.
///
/// Contains 8 general-purpose registers. Register `$0` is hardwired to zero
/// and cannot be modified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u16; NUM_REGS],
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    ///
    /// # Returns
    ///
    /// The 16-bit value stored in the specified register. Register `$0` always returns 0.
    pub fn read(&self, idx: usize) -> u16 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7). Writes to `$0` are ignored.
    /// * `val` - The 16-bit value to write.
    pub fn write(&mut self, idx: usize, val: u16) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Returns a copy of all register values, `$0` first.
    pub fn snapshot(&self) -> [u16; NUM_REGS] {
        self.regs
    }
}
