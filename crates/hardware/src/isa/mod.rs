//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the E20 encoding tables, field extraction, the decoder that maps a
//! 16-bit word to an [`instruction::Opcode`] plus operands, and a disassembler
//! used for instruction tracing.

/// Instruction decoding for all E20 instruction formats.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// E20 opcode groups and function codes.
pub mod e20;

/// Instruction field extraction and the decoded instruction type.
pub mod instruction;

pub use decode::decode;
pub use disasm::disassemble;
pub use instruction::{Decoded, InstructionBits, Opcode};
