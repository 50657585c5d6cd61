//! ALU arithmetic: all results wrap modulo 2^16.

use e20sim_core::core::units::alu::{Alu, AluOp};
use e20sim_core::isa::Opcode;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(AluOp::Add, 2, 3, 5)]
#[case(AluOp::Add, 0xFFFF, 1, 0)]
#[case(AluOp::Sub, 5, 3, 2)]
#[case(AluOp::Sub, 0, 1, 0xFFFF)]
fn arithmetic_wraps(#[case] op: AluOp, #[case] a: u16, #[case] b: u16, #[case] expected: u16) {
    assert_eq!(Alu::execute(op, a, b), expected);
}

#[test]
fn immediate_forms_share_the_adder_and_comparator() {
    assert_eq!(AluOp::for_opcode(Opcode::Addi), Some(AluOp::Add));
    assert_eq!(AluOp::for_opcode(Opcode::Slti), Some(AluOp::Slt));
    assert_eq!(AluOp::for_opcode(Opcode::Lw), None);
    assert_eq!(AluOp::for_opcode(Opcode::Unknown), None);
}

proptest! {
    #[test]
    fn sub_inverts_add(a in any::<u16>(), b in any::<u16>()) {
        let sum = Alu::execute(AluOp::Add, a, b);
        prop_assert_eq!(Alu::execute(AluOp::Sub, sum, b), a);
    }
}
