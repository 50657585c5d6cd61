//! Cache sets ("rows") and their blocks.
//!
//! Each set keeps a logical clock that advances on every access touching the
//! set, hit or miss. The clock value is stamped into the block that was hit or
//! filled, and the victim on a full set is the block with the smallest stamp.
//! Ties go to the block stored first.

/// Metadata for one cache line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Block {
    /// Set once the block has been filled.
    pub valid: bool,
    /// Which memory block occupies this line.
    pub tag: usize,
    /// Set clock value at the block's last hit or fill.
    pub last_used: u64,
}

impl Block {
    /// Creates a valid block.
    pub const fn filled(tag: usize, last_used: u64) -> Self {
        Self {
            valid: true,
            tag,
            last_used,
        }
    }
}

/// Outcome of scanning a set for a tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Probe {
    /// The tag was found in this way.
    Hit(usize),
    /// The tag was not found before the scan stopped. `empty` holds the
    /// first invalid way, where the scan stops.
    Miss {
        /// First invalid way, if the set is not full.
        empty: Option<usize>,
    },
}

/// A fixed-capacity group of blocks sharing one index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheSet {
    blocks: Vec<Block>,
    clock: u64,
}

impl CacheSet {
    /// Creates a set of `ways` invalid blocks.
    pub fn new(ways: usize) -> Self {
        Self {
            blocks: vec![Block::default(); ways],
            clock: 0,
        }
    }

    /// Advances the set clock and returns the new value.
    #[inline]
    pub const fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    /// Current value of the set clock.
    pub const fn clock(&self) -> u64 {
        self.clock
    }

    /// Blocks in storage order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of valid blocks.
    pub fn occupancy(&self) -> usize {
        self.blocks.iter().filter(|b| b.valid).count()
    }

    /// Scans blocks in storage order for `tag`.
    ///
    /// The scan stops at the first invalid block: a tag match counts only if
    /// it precedes every invalid block.
    pub fn probe(&self, tag: usize) -> Probe {
        for (way, block) in self.blocks.iter().enumerate() {
            if !block.valid {
                return Probe::Miss { empty: Some(way) };
            }
            if block.tag == tag {
                return Probe::Hit(way);
            }
        }
        Probe::Miss { empty: None }
    }

    /// Index of the first invalid block, if any.
    pub fn first_invalid(&self) -> Option<usize> {
        self.blocks.iter().position(|b| !b.valid)
    }

    /// Index of the least recently used block.
    ///
    /// Uses a strict comparison so the earliest block wins a tie.
    pub fn lru_victim(&self) -> usize {
        let mut victim = 0;
        for (way, block) in self.blocks.iter().enumerate() {
            if block.last_used < self.blocks[victim].last_used {
                victim = way;
            }
        }
        victim
    }

    /// Stamps the block at `way` as used at `stamp`.
    #[inline]
    pub fn touch(&mut self, way: usize, stamp: u64) {
        self.blocks[way].last_used = stamp;
    }

    /// Installs `tag` into `way`, overwriting whatever was there.
    #[inline]
    pub fn fill(&mut self, way: usize, tag: usize, stamp: u64) {
        self.blocks[way] = Block::filled(tag, stamp);
    }

    /// Installs `tag` into the first invalid block, or over the LRU victim
    /// when the set is full. Returns the way written.
    pub fn fill_or_evict(&mut self, empty: Option<usize>, tag: usize, stamp: u64) -> usize {
        let way = empty.unwrap_or_else(|| self.lru_victim());
        self.fill(way, tag, stamp);
        way
    }
}
