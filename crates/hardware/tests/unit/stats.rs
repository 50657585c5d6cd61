//! Simulation statistics.

use e20sim_core::core::units::cache::LevelName;
use e20sim_core::core::units::cache::log::{AccessEntry, AccessKind};
use e20sim_core::isa::Opcode;
use e20sim_core::stats::{LevelStats, SimStats};
use rstest::rstest;

fn access(level: LevelName, kind: AccessKind) -> AccessEntry {
    AccessEntry {
        level,
        kind,
        pc: 0,
        addr: 0,
        row: 0,
    }
}

#[rstest]
#[case(Opcode::Add, |s: &SimStats| s.inst_alu)]
#[case(Opcode::Slti, |s: &SimStats| s.inst_alu)]
#[case(Opcode::Lw, |s: &SimStats| s.inst_load)]
#[case(Opcode::Sw, |s: &SimStats| s.inst_store)]
#[case(Opcode::Jr, |s: &SimStats| s.inst_jump)]
#[case(Opcode::Jal, |s: &SimStats| s.inst_jump)]
#[case(Opcode::Jeq, |s: &SimStats| s.inst_branch)]
#[case(Opcode::Unknown, |s: &SimStats| s.inst_unknown)]
fn instruction_mix_buckets(#[case] op: Opcode, #[case] counter: fn(&SimStats) -> u64) {
    let mut stats = SimStats::new();
    stats.record_instruction(op, false);
    assert_eq!(counter(&stats), 1);
    assert_eq!(stats.instructions_retired, 1);
}

#[test]
fn taken_flag_only_counts_for_branches() {
    let mut stats = SimStats::new();
    stats.record_instruction(Opcode::Jeq, true);
    stats.record_instruction(Opcode::Jeq, false);
    stats.record_instruction(Opcode::Add, true);
    assert_eq!(stats.inst_branch, 2);
    assert_eq!(stats.branches_taken, 1);
}

#[test]
fn accesses_are_counted_per_level() {
    let mut stats = SimStats::new();
    stats.record_access(&access(LevelName::L1, AccessKind::Miss));
    stats.record_access(&access(LevelName::L2, AccessKind::Miss));
    stats.record_access(&access(LevelName::L1, AccessKind::Hit));
    stats.record_access(&access(LevelName::L1, AccessKind::Write));

    let l1 = stats.level(LevelName::L1);
    assert_eq!((l1.hits, l1.misses, l1.writes), (1, 1, 1));
    assert_eq!(l1.reads(), 2);
    assert_eq!(stats.level(LevelName::L2).misses, 1);
}

#[test]
fn hit_rate_ignores_writes() {
    let level = LevelStats {
        hits: 3,
        misses: 1,
        writes: 10,
    };
    assert!((level.hit_rate() - 0.75).abs() < f64::EPSILON);
}

#[test]
fn hit_rate_of_idle_level_is_zero() {
    assert!(LevelStats::default().hit_rate().abs() < f64::EPSILON);
}

#[test]
fn report_lists_both_levels() {
    let mut stats = SimStats::new();
    stats.record_instruction(Opcode::Lw, false);
    stats.record_access(&access(LevelName::L1, AccessKind::Miss));

    let report = stats.to_string();
    assert!(report.contains("E20 SIMULATION STATISTICS"));
    assert!(report.contains("sim_insts                1"));
    assert!(report.contains("  L1  accesses: 1 "));
    assert!(report.contains("  L2  accesses: 0 "));
}
