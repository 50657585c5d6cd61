//! ALU logical and comparison operations.
//!
//! Implements bitwise OR and AND and unsigned set-less-than. The comparison
//! result is always 0 or 1.

use super::AluOp;

/// Executes a logical or comparison operation. Returns `0` for non-logic opcodes.
pub const fn execute(op: AluOp, a: u16, b: u16) -> u16 {
    match op {
        AluOp::Or => a | b,
        AluOp::And => a & b,
        AluOp::Slt => (a < b) as u16,
        _ => 0,
    }
}
