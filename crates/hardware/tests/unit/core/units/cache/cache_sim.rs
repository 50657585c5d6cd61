//! Cache Level Unit Tests.
//!
//! Verifies a single set-associative level: address split, hit/miss
//! classification, LRU replacement and write allocation. Each cache is built
//! directly from a `CacheConfig` with no lower level attached.

use e20sim_core::config::CacheConfig;
use e20sim_core::core::units::cache::log::{AccessEntry, AccessKind};
use e20sim_core::core::units::cache::{Cache, LevelName};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

// ──────────────────────────────────────────────────────────
// Helpers
// ──────────────────────────────────────────────────────────

fn l1(size: usize, associativity: usize, blocksize: usize) -> Cache {
    Cache::new(LevelName::L1, CacheConfig::new(size, associativity, blocksize))
        .expect("geometry has rows")
}

fn read(cache: &mut Cache, addr: u16, log: &mut Vec<AccessEntry>) -> AccessKind {
    cache.read(0, addr, None, log)
}

fn kinds(log: &[AccessEntry]) -> Vec<AccessKind> {
    log.iter().map(|e| e.kind).collect()
}

// ══════════════════════════════════════════════════════════
// 1. Geometry
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(256, 2, 16, 8)]
#[case(4, 1, 1, 4)]
#[case(8, 2, 2, 2)]
#[case(32, 4, 2, 4)]
#[case(7, 2, 2, 1)]
fn rows_follow_geometry(
    #[case] size: usize,
    #[case] assoc: usize,
    #[case] block: usize,
    #[case] rows: usize,
) {
    assert_eq!(l1(size, assoc, block).num_rows(), rows);
}

#[rstest]
#[case::empty(0, 1, 1)]
#[case::smaller_than_one_row(4, 2, 4)]
fn geometry_without_rows_is_disabled(
    #[case] size: usize,
    #[case] assoc: usize,
    #[case] block: usize,
) {
    assert!(Cache::new(LevelName::L1, CacheConfig::new(size, assoc, block)).is_none());
}

#[test]
fn address_splits_into_row_and_tag() {
    let cache = l1(256, 2, 16);
    assert_eq!(cache.locate(0), (0, 0));
    assert_eq!(cache.locate(15), (0, 0));
    assert_eq!(cache.locate(16), (1, 0));
    assert_eq!(cache.locate(256), (0, 2));
    assert_eq!(cache.locate(300), (2, 2));
}

proptest! {
    #[test]
    fn locate_matches_block_arithmetic(
        addr in any::<u16>(),
        rows_log2 in 0u32..4,
        assoc in 1usize..5,
        block in 1usize..9,
    ) {
        let rows = 1usize << rows_log2;
        let cache = l1(rows * assoc * block, assoc, block);
        let block_id = usize::from(addr) / block;
        prop_assert_eq!(cache.locate(addr), (block_id % rows, block_id / rows));
    }
}

// ══════════════════════════════════════════════════════════
// 2. Read classification
// ══════════════════════════════════════════════════════════

/// Addresses 0 and 256 share row 0 with tags 0 and 2.
#[test]
fn same_row_distinct_tags_miss_then_hit() {
    let mut cache = l1(256, 2, 16);
    let mut log: Vec<AccessEntry> = Vec::new();

    assert_eq!(read(&mut cache, 0, &mut log), AccessKind::Miss);
    assert_eq!(read(&mut cache, 256, &mut log), AccessKind::Miss);
    assert_eq!(read(&mut cache, 0, &mut log), AccessKind::Hit);

    assert_eq!(kinds(&log), vec![AccessKind::Miss, AccessKind::Miss, AccessKind::Hit]);
    assert!(log.iter().all(|e| e.row == 0 && e.level == LevelName::L1));
}

#[test]
fn words_in_the_same_block_hit() {
    let mut cache = l1(256, 2, 16);
    let mut log: Vec<AccessEntry> = Vec::new();
    let _ = read(&mut cache, 32, &mut log);
    assert_eq!(read(&mut cache, 47, &mut log), AccessKind::Hit);
    assert_eq!(read(&mut cache, 48, &mut log), AccessKind::Miss);
}

#[test]
fn every_access_advances_the_row_clock() {
    let mut cache = l1(4, 1, 1);
    let mut log: Vec<AccessEntry> = Vec::new();
    let _ = read(&mut cache, 0, &mut log);
    let _ = read(&mut cache, 0, &mut log);
    cache.write(0, 4, None, &mut log);
    assert_eq!(cache.row(0).clock(), 3);
    assert_eq!(cache.row(1).clock(), 0);
}

#[test]
fn hit_refreshes_timestamp_without_other_changes() {
    let mut cache = l1(2, 2, 1);
    let mut log: Vec<AccessEntry> = Vec::new();
    let _ = read(&mut cache, 0, &mut log);
    let _ = read(&mut cache, 1, &mut log);
    let before = cache.row(0).blocks().to_vec();

    let _ = read(&mut cache, 0, &mut log);
    let after = cache.row(0).blocks();

    assert_eq!(after[0].tag, before[0].tag);
    assert_eq!(after[0].last_used, 3);
    assert_eq!(after[1], before[1]);
}

// ══════════════════════════════════════════════════════════
// 3. LRU replacement
// ══════════════════════════════════════════════════════════

/// Four distinct tags fill a 4-way row without evicting; a fifth evicts the
/// block with the oldest timestamp.
#[test]
fn fifth_tag_evicts_least_recently_used() {
    // 4 rows of 4 ways; addresses 0, 4, 8, 12, 16 all map to row 0.
    let mut cache = l1(16, 4, 1);
    let mut log: Vec<AccessEntry> = Vec::new();

    for addr in [0, 4, 8, 12] {
        assert_eq!(read(&mut cache, addr, &mut log), AccessKind::Miss);
    }
    assert_eq!(cache.row(0).occupancy(), 4);

    assert_eq!(read(&mut cache, 0, &mut log), AccessKind::Hit);
    assert_eq!(read(&mut cache, 16, &mut log), AccessKind::Miss);

    assert!(cache.contains(0));
    assert!(!cache.contains(4), "oldest block should have been evicted");
    assert!(cache.contains(8));
    assert!(cache.contains(12));
    assert!(cache.contains(16));
    assert_eq!(cache.row(0).occupancy(), 4);
}

#[test]
fn direct_mapped_conflict_always_misses() {
    let mut cache = l1(4, 1, 1);
    let mut log: Vec<AccessEntry> = Vec::new();
    for _ in 0..3 {
        let _ = read(&mut cache, 1, &mut log);
        let _ = read(&mut cache, 5, &mut log);
    }
    assert!(log.iter().all(|e| e.kind == AccessKind::Miss));
}

proptest! {
    #[test]
    fn row_never_exceeds_associativity(addrs in prop::collection::vec(0u16..64, 1..64)) {
        let mut cache = l1(8, 2, 1);
        let mut log: Vec<AccessEntry> = Vec::new();
        for addr in addrs {
            let _ = read(&mut cache, addr, &mut log);
            let (row, _) = cache.locate(addr);
            prop_assert!(cache.row(row).occupancy() <= 2);
            prop_assert!(cache.contains(addr));
        }
    }
}

// ══════════════════════════════════════════════════════════
// 4. Writes
// ══════════════════════════════════════════════════════════

#[test]
fn write_is_logged_unclassified_and_allocates() {
    let mut cache = l1(4, 1, 1);
    let mut log: Vec<AccessEntry> = Vec::new();
    cache.write(9, 6, None, &mut log);

    assert_eq!(
        log,
        vec![AccessEntry {
            level: LevelName::L1,
            kind: AccessKind::Write,
            pc: 9,
            addr: 6,
            row: 2,
        }]
    );
    assert!(cache.contains(6));
    assert_eq!(read(&mut cache, 6, &mut log), AccessKind::Hit);
}

#[test]
fn write_allocates_without_matching_existing_tag() {
    let mut cache = l1(2, 2, 1);
    let mut log: Vec<AccessEntry> = Vec::new();
    cache.write(0, 5, None, &mut log);
    cache.write(0, 5, None, &mut log);

    let tags: Vec<usize> = cache.row(0).blocks().iter().map(|b| b.tag).collect();
    assert_eq!(tags, vec![5, 5]);
    assert_eq!(cache.row(0).occupancy(), 2);
}

#[test]
fn write_to_full_row_evicts_least_recently_used() {
    let mut cache = l1(2, 2, 1);
    let mut log: Vec<AccessEntry> = Vec::new();
    let _ = read(&mut cache, 0, &mut log);
    let _ = read(&mut cache, 1, &mut log);
    let _ = read(&mut cache, 0, &mut log);
    cache.write(0, 2, None, &mut log);

    assert!(cache.contains(0));
    assert!(!cache.contains(1));
    assert!(cache.contains(2));
}

// ══════════════════════════════════════════════════════════
// 5. Log format
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(AccessKind::Miss, "L1 MISS  pc:    4\taddr:  128\trow:   0")]
#[case(AccessKind::Hit, "L1 HIT   pc:    4\taddr:  128\trow:   0")]
#[case(AccessKind::Write, "L1 SW    pc:    4\taddr:  128\trow:   0")]
fn log_line_layout(#[case] kind: AccessKind, #[case] expected: &str) {
    let entry = AccessEntry {
        level: LevelName::L1,
        kind,
        pc: 4,
        addr: 128,
        row: 0,
    };
    assert_eq!(entry.to_string(), expected);
}
