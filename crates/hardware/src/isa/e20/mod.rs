//! E20 encoding tables.
//!
//! The top three bits of every instruction select an opcode group. Group 0
//! carries the three-register instructions, whose operation is selected by a
//! function code in the low four bits.

/// Function codes for group 0 (three-register) instructions.
pub mod funct;

/// Opcode group values (bits 15-13).
pub mod opcodes;
