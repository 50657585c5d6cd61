//! E20 Opcode Groups.
//!
//! Defines the opcode group values held in bits 15-13 of an instruction word.

/// Three-register instructions (ADD, SUB, OR, AND, SLT, JR).
pub const OP_REG: u16 = 0b000;

/// Add immediate (ADDI).
pub const OP_ADDI: u16 = 0b001;

/// Unconditional jump to a 13-bit absolute target (J).
pub const OP_J: u16 = 0b010;

/// Jump and link (JAL).
pub const OP_JAL: u16 = 0b011;

/// Load word (LW).
pub const OP_LW: u16 = 0b100;

/// Store word (SW).
pub const OP_SW: u16 = 0b101;

/// Branch if equal (JEQ).
pub const OP_JEQ: u16 = 0b110;

/// Set if less than immediate (SLTI).
pub const OP_SLTI: u16 = 0b111;
