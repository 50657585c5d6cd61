//! Instruction Disassembler for the E20.
//!
//! Converts a 16-bit instruction encoding into the assembler's syntax for
//! instruction tracing and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use e20sim_core::isa::disasm::disassemble;
//! let text = disassemble(0b001_000_001_0000101); // addi $1, $0, 5
//! assert_eq!(text, "addi $1, $0, 5");
//! ```

use crate::isa::decode::decode;
use crate::isa::instruction::Opcode;

/// Disassembles a 16-bit E20 instruction into a human-readable string.
///
/// Immediates of the 7-bit formats are printed as signed values and `jeq`
/// shows its raw relative offset, since no label table is available.
/// Unrecognized encodings are rendered as `.fill` directives.
///
/// # Arguments
///
/// * `inst` - The raw 16-bit instruction encoding.
pub fn disassemble(inst: u16) -> String {
    let d = decode(inst);
    let mn = d.opcode.mnemonic();
    let simm = d.imm as i16;

    match d.opcode {
        Opcode::Add | Opcode::Sub | Opcode::Or | Opcode::And | Opcode::Slt => {
            format!("{mn} ${}, ${}, ${}", d.rc, d.ra, d.rb)
        }
        Opcode::Addi | Opcode::Slti => format!("{mn} ${}, ${}, {simm}", d.rb, d.ra),
        Opcode::Lw | Opcode::Sw => format!("{mn} ${}, {simm}(${})", d.rb, d.ra),
        Opcode::Jeq => format!("{mn} ${}, ${}, {simm}", d.ra, d.rb),
        Opcode::Jr => format!("{mn} ${}", d.ra),
        Opcode::J | Opcode::Jal => format!("{mn} {}", d.imm),
        Opcode::Unknown => format!("{mn} {inst}"),
    }
}
