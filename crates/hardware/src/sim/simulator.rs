//! Simulator: owns the machine state and the cache hierarchy side-by-side.
//!
//! Each step fetches the word selected by the program counter, decodes it,
//! records the data access with the cache hierarchy for loads and stores,
//! executes it, and applies the resulting program-counter delta. The loop ends
//! when an unconditional jump targets its own fetch address.

use tracing::{info, trace};

use crate::common::ConfigError;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::units::cache::CacheHierarchy;
use crate::core::units::cache::log::{AccessEntry, AccessSink};
use crate::isa::{Opcode, decode, disassemble};
use crate::sim::report::FinalState;
use crate::stats::SimStats;

/// Outcome of a single step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// An instruction executed; the machine keeps running.
    Continue,
    /// The fetched instruction was the self-jump halt idiom. Nothing changed.
    Halted,
}

/// Top-level simulator: CPU architectural state + cache hierarchy.
#[derive(Clone, Debug, Default)]
pub struct Simulator {
    /// CPU architectural state (registers, memory, program counter).
    pub cpu: Cpu,
    /// Cache levels observing every load and store.
    pub caches: CacheHierarchy,
    /// Performance statistics.
    pub stats: SimStats,
    trace: bool,
}

impl Simulator {
    /// Creates a simulator running `image` with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the cache configuration is invalid.
    pub fn new(image: &[u16], config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::with_caches(image, CacheHierarchy::new(&config.cache)?)
            .tracing(config.general.trace_instructions))
    }

    /// Creates a simulator running `image` over an already built hierarchy.
    pub fn with_caches(image: &[u16], caches: CacheHierarchy) -> Self {
        Self {
            cpu: Cpu::with_image(image),
            caches,
            stats: SimStats::new(),
            trace: false,
        }
    }

    /// Enables or disables per-instruction trace events.
    #[must_use]
    pub const fn tracing(mut self, enabled: bool) -> Self {
        self.trace = enabled;
        self
    }

    /// Executes one instruction, emitting cache log entries to `sink`.
    pub fn step(&mut self, sink: &mut dyn AccessSink) -> StepOutcome {
        let pc = self.cpu.pc;
        let fetch_addr = self.cpu.fetch_addr();
        let word = self.cpu.fetch();
        let decoded = decode(word);

        if decoded.is_halt(fetch_addr) {
            return StepOutcome::Halted;
        }

        if self.trace {
            trace!(pc, word, "{}", disassemble(word));
        }

        let mut tally = Tally {
            stats: &mut self.stats,
            inner: sink,
        };
        match decoded.opcode {
            Opcode::Lw => {
                let addr = self.cpu.effective_address(&decoded);
                let _ = self.caches.read(pc, addr, &mut tally);
            }
            Opcode::Sw => {
                let addr = self.cpu.effective_address(&decoded);
                self.caches.write(pc, addr, &mut tally);
            }
            _ => {}
        }

        let taken = decoded.opcode == Opcode::Jeq
            && self.cpu.regs.read(decoded.ra) == self.cpu.regs.read(decoded.rb);
        let delta = self.cpu.execute(&decoded);
        self.stats.record_instruction(decoded.opcode, taken);
        self.cpu.advance(delta);

        StepOutcome::Continue
    }

    /// Runs until the halt idiom is fetched.
    ///
    /// Programs that never halt run forever; there is no step limit.
    ///
    /// # Returns
    ///
    /// The number of instructions executed by this call.
    pub fn run(&mut self, sink: &mut dyn AccessSink) -> u64 {
        let start = self.stats.instructions_retired;
        while self.step(sink) == StepOutcome::Continue {}
        let executed = self.stats.instructions_retired - start;
        info!(pc = self.cpu.pc, executed, "halted");
        executed
    }

    /// Snapshot of the current architectural state.
    pub fn snapshot(&self) -> FinalState {
        FinalState::capture(&self.cpu)
    }
}

/// Forwards log entries to the caller's sink while counting them.
struct Tally<'a> {
    stats: &'a mut SimStats,
    inner: &'a mut dyn AccessSink,
}

impl AccessSink for Tally<'_> {
    fn record(&mut self, entry: AccessEntry) {
        self.stats.record_access(&entry);
        self.inner.record(entry);
    }
}
