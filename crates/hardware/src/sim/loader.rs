//! Program Image Loader.
//!
//! Reads the text encoding of an E20 program: one instruction word per line,
//! written as binary digits after the first `b` on the line, as in
//!
//! ```text
//! ram[0] = 16'b0010000010000101;
//! ram[1] = 16'b0100000000000001;
//! ```
//!
//! Lines are loaded in order starting at address 0; the bracketed index is
//! not consulted. Blank lines are skipped. Memory past the last word is zero.

use std::fs;
use std::path::Path;

use crate::common::{LoadError, MEMORY_WORDS};

/// Maximum binary digits read from one line.
const WORD_BITS: usize = 16;

/// Parses a program image from its text encoding.
///
/// Reads up to 16 binary digits following the first `b` on each line.
///
/// # Errors
///
/// Returns [`LoadError::MalformedLine`] for a non-blank line without binary
/// digits after a `b`, and [`LoadError::TooLarge`] for images longer than
/// main memory.
pub fn parse_program(text: &str) -> Result<Vec<u16>, LoadError> {
    let mut image = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if image.len() == MEMORY_WORDS {
            return Err(LoadError::TooLarge {
                limit: MEMORY_WORDS,
            });
        }
        let word = parse_word(line).ok_or_else(|| LoadError::MalformedLine {
            line: idx + 1,
            text: line.to_string(),
        })?;
        image.push(word);
    }

    Ok(image)
}

/// Loads a program image from disk.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, or any error of
/// [`parse_program`].
pub fn load_program(path: impl AsRef<Path>) -> Result<Vec<u16>, LoadError> {
    let text = fs::read_to_string(path)?;
    parse_program(&text)
}

fn parse_word(line: &str) -> Option<u16> {
    let (_, rest) = line.split_once('b')?;
    let digits: String = rest
        .chars()
        .take(WORD_BITS)
        .take_while(|c| matches!(c, '0' | '1'))
        .collect();
    if digits.is_empty() {
        return None;
    }
    u16::from_str_radix(&digits, 2).ok()
}
