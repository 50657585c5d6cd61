//! Architectural state of the E20.
//!
//! The only programmer-visible state besides memory and the program counter
//! is the eight-entry general-purpose register file.

/// General-purpose register file with `$0` hardwired to zero.
pub mod gpr;

pub use gpr::Gpr;
