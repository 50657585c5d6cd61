//! Common utilities and types used throughout the E20 simulator.
//!
//! This module provides building blocks shared by every component:
//! 1. **Constants:** Register file and memory geometry, address masks.
//! 2. **Error Handling:** Configuration and program-loading errors raised at the
//!    adapter edge. The execution core itself is infallible.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for configuration and program loading.
pub mod error;

pub use constants::{ADDR_MASK, LINK_REG, MEMORY_WORDS, NUM_REGS};
pub use error::{ConfigError, LoadError};
