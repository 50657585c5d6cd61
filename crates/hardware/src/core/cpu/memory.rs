//! Main memory.
//!
//! A flat array of 8192 16-bit words. Every access is reduced to the low 13
//! bits of its address, so reads and writes wrap instead of faulting.

use crate::common::{ADDR_MASK, MEMORY_WORDS};

/// Word-addressed main memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    words: Vec<u16>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Creates zero-filled memory.
    pub fn new() -> Self {
        Self {
            words: vec![0; MEMORY_WORDS],
        }
    }

    /// Creates memory initialized from a program image.
    ///
    /// Words beyond the end of the image are zero. Images longer than memory
    /// are truncated; the loader rejects them before they get here.
    pub fn from_image(image: &[u16]) -> Self {
        let mut mem = Self::new();
        let len = image.len().min(MEMORY_WORDS);
        mem.words[..len].copy_from_slice(&image[..len]);
        mem
    }

    /// Reads the word at `addr`, masked to 13 bits.
    #[inline]
    pub fn read(&self, addr: u16) -> u16 {
        self.words[usize::from(addr & ADDR_MASK)]
    }

    /// Writes `val` to the word at `addr`, masked to 13 bits.
    #[inline]
    pub fn write(&mut self, addr: u16, val: u16) {
        self.words[usize::from(addr & ADDR_MASK)] = val;
    }

    /// Read-only view of all memory words.
    pub fn words(&self) -> &[u16] {
        &self.words
    }
}
