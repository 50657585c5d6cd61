//! Execution units and functional components.
//!
//! Contains the integer ALU used by the three-register and immediate
//! instructions, and the cache hierarchy that classifies every data access.

/// Arithmetic Logic Unit for 16-bit integer operations.
pub mod alu;

/// Cache hierarchy (L1, optional L2) with logical-clock LRU replacement.
pub mod cache;
