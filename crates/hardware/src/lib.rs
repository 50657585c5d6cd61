//! E20 system simulator library.
//!
//! This crate implements a functional simulator for the 16-bit E20
//! register machine together with a configurable two-level cache model:
//! 1. **ISA:** Decoding of 16-bit instruction words and a disassembler for tracing.
//! 2. **Core:** Register file, main memory, ALU and the execute state machine.
//! 3. **Cache:** Set-associative L1/L2 levels with per-row logical-clock LRU,
//!    inclusive miss cascading and an append-only access log.
//! 4. **Simulation:** Program image loader, fetch-decode-execute driver, final
//!    state report, configuration, and statistics collection.

/// Common types and constants (register/memory geometry, error types).
pub mod common;
/// Simulator configuration (cache geometry, tracing switches).
pub mod config;
/// CPU core (registers, memory, ALU, execution, cache hierarchy).
pub mod core;
/// Instruction set (decode, instruction fields, opcodes, disassembler).
pub mod isa;
/// Program loader, simulation driver, and final state reporting.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Machine state: registers, memory, and program counter.
pub use crate::core::Cpu;
/// Top-level simulator driving the fetch-decode-execute loop.
pub use crate::sim::simulator::Simulator;
