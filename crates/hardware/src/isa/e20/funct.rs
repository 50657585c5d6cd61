//! E20 Function Codes.
//!
//! Low four bits of a group 0 instruction.

/// `rC = rA + rB`.
pub const ADD: u16 = 0b0000;
/// `rC = rA - rB`.
pub const SUB: u16 = 0b0001;
/// `rC = rA | rB`.
pub const OR: u16 = 0b0010;
/// `rC = rA & rB`.
pub const AND: u16 = 0b0011;
/// `rC = rA < rB` (unsigned).
pub const SLT: u16 = 0b0100;
/// `pc = rA`. Only valid when bits 9-4 are all zero.
pub const JR: u16 = 0b1000;
