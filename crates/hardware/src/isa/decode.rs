//! E20 Instruction Decoder.
//!
//! Maps a 16-bit instruction word to a [`Decoded`] instruction. Decoding is
//! pure and total: every word decodes, and words matching no format become
//! [`Opcode::Unknown`].

use crate::isa::e20::{funct, opcodes};
use crate::isa::instruction::{Decoded, InstructionBits, JR_ZERO_MASK, Opcode};

/// Decodes an E20 instruction into its component fields.
///
/// `rA` and `rB` are extracted for every format. `rC` is only populated for
/// three-register instructions. The immediate defaults to the sign-extended
/// low seven bits and is replaced by the 13-bit target for `j` and `jal`.
///
/// # Arguments
///
/// * `inst` - The 16-bit instruction encoding to decode
///
/// # Returns
///
/// A `Decoded` structure containing the opcode and operand fields.
pub fn decode(inst: u16) -> Decoded {
    let mut decoded = Decoded {
        raw: inst,
        opcode: Opcode::Unknown,
        ra: inst.ra(),
        rb: inst.rb(),
        rc: 0,
        imm: inst.imm7(),
    };

    decoded.opcode = match inst.group() {
        opcodes::OP_REG => {
            decoded.rc = inst.rc();
            decode_reg(inst)
        }
        opcodes::OP_ADDI => Opcode::Addi,
        opcodes::OP_J => {
            decoded.imm = inst.imm13();
            Opcode::J
        }
        opcodes::OP_JAL => {
            decoded.imm = inst.imm13();
            Opcode::Jal
        }
        opcodes::OP_LW => Opcode::Lw,
        opcodes::OP_SW => Opcode::Sw,
        opcodes::OP_JEQ => Opcode::Jeq,
        opcodes::OP_SLTI => Opcode::Slti,
        _ => Opcode::Unknown,
    };

    decoded
}

/// Selects the three-register operation from the function code.
///
/// `jr` takes neither a destination nor a displacement, so it is only
/// recognized when bits 9-4 are all clear.
fn decode_reg(inst: u16) -> Opcode {
    match inst.funct() {
        funct::ADD => Opcode::Add,
        funct::SUB => Opcode::Sub,
        funct::OR => Opcode::Or,
        funct::AND => Opcode::And,
        funct::SLT => Opcode::Slt,
        funct::JR if inst & JR_ZERO_MASK == 0 => Opcode::Jr,
        _ => Opcode::Unknown,
    }
}
