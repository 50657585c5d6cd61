//! Global System Constants.
//!
//! Geometry of the E20 machine: an 8-entry register file of 16-bit words and
//! 8192 words of main memory addressed by the low 13 bits of any address.

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 8;

/// Register written with the return address by `jal`.
pub const LINK_REG: usize = 7;

/// Number of 16-bit words of main memory.
pub const MEMORY_WORDS: usize = 8192;

/// Mask selecting the 13 address bits that index main memory.
///
/// Program counters, effective addresses and jump targets are all reduced
/// with this mask; there is no out-of-range fault.
pub const ADDR_MASK: u16 = 0x1FFF;

/// Number of memory words shown in the final state report.
pub const REPORT_WORDS: usize = 128;

/// Memory words per line of the final state report.
pub const REPORT_WORDS_PER_LINE: usize = 8;
