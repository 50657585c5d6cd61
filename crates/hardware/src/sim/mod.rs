//! Simulation driver and I/O adapters.
//!
//! Provides the program image loader, the fetch-decode-execute loop, and the
//! final state snapshot used for reporting.

/// Program image loading.
pub mod loader;

/// Final state snapshot and its textual report.
pub mod report;

/// The fetch-decode-execute control loop.
pub mod simulator;
