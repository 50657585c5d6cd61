//! Instruction Execution.
//!
//! Implements the E20 execute state machine: one decoded instruction updates
//! registers and memory and yields the program-counter delta. Jump-class
//! instructions assign the program counter directly and return a delta of 0.
//!
//! Destination writes go through [`Gpr::write`](crate::core::arch::Gpr::write),
//! so an instruction naming `$0` as its destination leaves it at zero.

use crate::common::LINK_REG;
use crate::core::cpu::Cpu;
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::{Decoded, Opcode};

/// Program-counter delta of every instruction that falls through.
pub const PC_STEP: u16 = 1;

impl Cpu {
    /// Executes a single decoded instruction.
    ///
    /// Cache accounting for `lw`/`sw` is the caller's concern; this only
    /// touches architectural state.
    ///
    /// # Returns
    ///
    /// The amount to add to the program counter: `1` for fall-through
    /// instructions, `imm + 1` for a taken `jeq`, `0` for `j`, `jal` and `jr`
    /// (which have already assigned `pc`).
    pub fn execute(&mut self, d: &Decoded) -> u16 {
        let a = self.regs.read(d.ra);
        let b = self.regs.read(d.rb);

        match d.opcode {
            Opcode::Add | Opcode::Sub | Opcode::Or | Opcode::And | Opcode::Slt => {
                if let Some(op) = AluOp::for_opcode(d.opcode) {
                    self.regs.write(d.rc, Alu::execute(op, a, b));
                }
                PC_STEP
            }
            Opcode::Addi => {
                self.regs.write(d.rb, Alu::execute(AluOp::Add, a, d.imm));
                PC_STEP
            }
            Opcode::Slti => {
                self.regs.write(d.rb, Alu::execute(AluOp::Slt, a, d.imm));
                PC_STEP
            }
            Opcode::Lw => {
                let val = self.memory.read(self.effective_address(d));
                self.regs.write(d.rb, val);
                PC_STEP
            }
            Opcode::Sw => {
                self.memory.write(self.effective_address(d), b);
                PC_STEP
            }
            Opcode::Jeq => {
                if a == b {
                    d.imm.wrapping_add(PC_STEP)
                } else {
                    PC_STEP
                }
            }
            Opcode::Jr => {
                self.pc = a;
                0
            }
            Opcode::J => {
                self.pc = d.imm;
                0
            }
            Opcode::Jal => {
                self.regs.write(LINK_REG, self.pc.wrapping_add(PC_STEP));
                self.pc = d.imm;
                0
            }
            Opcode::Unknown => PC_STEP,
        }
    }

    /// Applies a program-counter delta returned by [`Cpu::execute`].
    #[inline]
    pub const fn advance(&mut self, delta: u16) {
        self.pc = self.pc.wrapping_add(delta);
    }
}
