//! Instruction Execution Semantics.
//!
//! Each test decodes one word, executes it on a bare `Cpu`, applies the
//! returned program-counter delta, and checks the architectural effect.

use e20sim_core::common::LINK_REG;
use e20sim_core::core::Cpu;
use e20sim_core::isa::decode;
use proptest::prelude::*;
use rstest::rstest;

use crate::common::builder::instruction::inst;

/// Executes `word` at `pc` and returns the machine afterwards.
fn exec_at(mut cpu: Cpu, pc: u16, word: u16) -> Cpu {
    cpu.pc = pc;
    let delta = cpu.execute(&decode(word));
    cpu.advance(delta);
    cpu
}

fn cpu_with(regs: &[(usize, u16)]) -> Cpu {
    let mut cpu = Cpu::new();
    for &(r, v) in regs {
        cpu.regs.write(r, v);
    }
    cpu
}

// ──────────────────────────────────────────────────────────
// Register-writing instructions
// ──────────────────────────────────────────────────────────

#[rstest]
#[case::add(inst().add(3, 1, 2).build(), 3, 7)]
#[case::sub(inst().sub(3, 2, 1).build(), 3, 1)]
#[case::or(inst().or(3, 1, 2).build(), 3, 0b111)]
#[case::and(inst().and(3, 1, 2).build(), 3, 0)]
#[case::slt(inst().slt(3, 1, 2).build(), 3, 1)]
#[case::addi(inst().addi(4, 1, -4).build(), 4, 0xFFFF)]
#[case::slti_signed_imm_compares_unsigned(inst().slti(4, 1, -1).build(), 4, 1)]
#[case::slti_false(inst().slti(4, 2, 2).build(), 4, 0)]
fn register_ops_write_destination(#[case] word: u16, #[case] dest: usize, #[case] expected: u16) {
    let cpu = exec_at(cpu_with(&[(1, 3), (2, 4)]), 10, word);
    assert_eq!(cpu.regs.read(dest), expected);
    assert_eq!(cpu.pc, 11);
}

#[test]
fn writes_to_register_zero_are_discarded() {
    let cpu = exec_at(Cpu::new(), 0, inst().addi(0, 0, 5).build());
    assert_eq!(cpu.regs.read(0), 0);
    assert_eq!(cpu.pc, 1);
}

// ──────────────────────────────────────────────────────────
// Memory instructions
// ──────────────────────────────────────────────────────────

#[test]
fn lw_reads_from_base_plus_displacement() {
    let mut cpu = cpu_with(&[(2, 100)]);
    cpu.memory.write(96, 0xABCD);
    let cpu = exec_at(cpu, 0, inst().lw(1, 2, -4).build());
    assert_eq!(cpu.regs.read(1), 0xABCD);
    assert_eq!(cpu.pc, 1);
}

#[test]
fn lw_address_wraps_to_thirteen_bits() {
    let mut cpu = cpu_with(&[(2, 0x1FFF)]);
    cpu.memory.write(1, 77);
    let cpu = exec_at(cpu, 0, inst().lw(1, 2, 2).build());
    assert_eq!(cpu.regs.read(1), 77);
}

#[test]
fn sw_stores_rb() {
    let cpu = cpu_with(&[(1, 0x1234), (2, 8)]);
    let cpu = exec_at(cpu, 0, inst().sw(1, 2, 3).build());
    assert_eq!(cpu.memory.read(11), 0x1234);
    assert_eq!(cpu.pc, 1);
}

#[test]
fn effective_address_is_masked() {
    let cpu = cpu_with(&[(3, 0xFFFF)]);
    let d = decode(inst().sw(1, 3, 1).build());
    assert_eq!(cpu.effective_address(&d), 0);
}

// ──────────────────────────────────────────────────────────
// Control flow
// ──────────────────────────────────────────────────────────

#[test]
fn jeq_taken_adds_offset_plus_one() {
    let cpu = exec_at(cpu_with(&[(1, 5), (2, 5)]), 10, inst().jeq(1, 2, -3).build());
    assert_eq!(cpu.pc, 8);
}

#[test]
fn jeq_not_taken_falls_through() {
    let cpu = exec_at(cpu_with(&[(1, 5), (2, 6)]), 10, inst().jeq(1, 2, 20).build());
    assert_eq!(cpu.pc, 11);
}

#[test]
fn j_sets_pc_to_target() {
    let cpu = exec_at(Cpu::new(), 3, inst().j(100).build());
    assert_eq!(cpu.pc, 100);
}

#[test]
fn jal_links_return_address() {
    let cpu = exec_at(Cpu::new(), 3, inst().jal(100).build());
    assert_eq!(cpu.pc, 100);
    assert_eq!(cpu.regs.read(LINK_REG), 4);
}

#[test]
fn jr_keeps_all_sixteen_bits() {
    let cpu = exec_at(cpu_with(&[(7, 0xFFFF)]), 0, inst().jr(7).build());
    assert_eq!(cpu.pc, 0xFFFF);
    assert_eq!(cpu.fetch_addr(), 0x1FFF);
}

#[test]
fn unknown_word_is_a_no_op() {
    let before = cpu_with(&[(1, 1), (2, 2)]);
    let after = exec_at(before.clone(), 4, inst().funct(9).ra(1).rb(2).build());
    assert_eq!(after.regs, before.regs);
    assert_eq!(after.memory, before.memory);
    assert_eq!(after.pc, 5);
}

// ──────────────────────────────────────────────────────────
// Properties
// ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn register_zero_stays_zero(word in any::<u16>(), regs in prop::array::uniform8(any::<u16>())) {
        let mut cpu = Cpu::new();
        for (i, v) in regs.iter().enumerate() {
            cpu.regs.write(i, *v);
        }
        let cpu = exec_at(cpu, 0, word);
        prop_assert_eq!(cpu.regs.read(0), 0);
        prop_assert_eq!(cpu.regs.snapshot()[0], 0);
    }

    #[test]
    fn jeq_branches_relative_to_next_instruction(
        a in 0u16..4,
        b in 0u16..4,
        pc in 0u16..0x2000,
        imm in -64i16..64,
    ) {
        let cpu = exec_at(cpu_with(&[(1, a), (2, b)]), pc, inst().jeq(1, 2, imm).build());
        let next = pc.wrapping_add(1);
        let expected = if a == b { next.wrapping_add(imm as u16) } else { next };
        prop_assert_eq!(cpu.pc, expected);
    }
}
