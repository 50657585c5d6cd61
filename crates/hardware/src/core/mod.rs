//! Core processor implementation.
//!
//! This module contains the E20 machine state (register file, memory, program
//! counter), the execute state machine, and the functional units it drives:
//! the ALU and the cache hierarchy that observes every load and store.

/// Architectural state components (general-purpose registers).
pub mod arch;

/// CPU state and instruction execution.
pub mod cpu;

/// Execution units (ALU, cache hierarchy).
pub mod units;

pub use self::cpu::Cpu;
