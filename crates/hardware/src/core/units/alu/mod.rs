//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 16-bit integer ALU used by the execute stage.
//! All arithmetic wraps modulo 2^16 and all comparisons are unsigned.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      Or, And, Slt

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical and comparison operations (or, and, slt).
pub mod logic;

use crate::isa::Opcode;

/// ALU operation selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Bitwise OR.
    Or,
    /// Bitwise AND.
    And,
    /// Unsigned set-less-than.
    Slt,
}

impl AluOp {
    /// Maps an instruction to the ALU operation it performs, if any.
    ///
    /// `addi` and `slti` share the adder and comparator with their
    /// three-register forms.
    pub const fn for_opcode(op: Opcode) -> Option<Self> {
        match op {
            Opcode::Add | Opcode::Addi => Some(Self::Add),
            Opcode::Sub => Some(Self::Sub),
            Opcode::Or => Some(Self::Or),
            Opcode::And => Some(Self::And),
            Opcode::Slt | Opcode::Slti => Some(Self::Slt),
            _ => None,
        }
    }
}

/// Arithmetic Logic Unit for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand
    ///
    /// # Examples
    ///
    /// ```
    /// use e20sim_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 0xFFFF, 2), 1);
    /// assert_eq!(Alu::execute(AluOp::Slt, 3, 0xFFFF), 1);
    /// ```
    pub const fn execute(op: AluOp, a: u16, b: u16) -> u16 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::Or | AluOp::And | AluOp::Slt => logic::execute(op, a, b),
        }
    }
}
