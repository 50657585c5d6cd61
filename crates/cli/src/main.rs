//! E20 cache simulator CLI.
//!
//! This binary runs one program image to completion. It performs:
//! 1. **Configuration:** Cache geometry from `--cache` or a JSON `--config` file.
//! 2. **Loading:** Reads the `ram[i] = 16'b...;` program image.
//! 3. **Reporting:** Prints the cache geometry, the cache access log as it is
//!    produced, the final machine state, and optionally statistics.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use e20sim_core::Simulator;
use e20sim_core::common::{ConfigError, LoadError};
use e20sim_core::config::{Config, HierarchyConfig};
use e20sim_core::core::units::cache::log::{AccessEntry, AccessSink, NullSink};
use e20sim_core::sim::loader;

#[derive(Parser, Debug)]
#[command(
    name = "simcache",
    version,
    about = "E20 simulator with a two-level set-associative cache model",
    long_about = "Run an E20 program image until it halts, logging every cache access.\n\nExamples:\n  simcache prog.bin --cache 4,1,1\n  simcache prog.bin --cache 8,2,1,32,4,2 --stats\n  simcache prog.bin --config cache.json --trace"
)]
struct Cli {
    /// Program image, one `ram[i] = 16'b...;` line per instruction word.
    program: PathBuf,

    /// Cache geometry: `size,associativity,blocksize` for L1, optionally
    /// followed by a second triple for L2.
    #[arg(long, value_name = "L1[,L2]")]
    cache: Option<HierarchyConfig>,

    /// JSON configuration file. `--cache` overrides its cache section.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Trace every executed instruction to stderr.
    #[arg(long)]
    trace: bool,

    /// Print simulation statistics after the final state.
    #[arg(long)]
    stats: bool,

    /// Do not print the cache access log.
    #[arg(long)]
    quiet_log: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("could not read {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Prints each cache access as it happens.
#[derive(Debug, Default)]
struct StdoutSink;

impl AccessSink for StdoutSink {
    fn record(&mut self, entry: AccessEntry) {
        println!("{entry}");
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.trace);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("simcache: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence.
fn init_tracing(trace: bool) {
    let default = if trace { "warn,e20sim_core=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
                path: path.clone(),
                source,
            })?;
            Config::from_json(&json)?
        }
        None => Config::default(),
    };
    if let Some(cache) = cli.cache {
        config.cache = cache;
    }
    config.general.trace_instructions |= cli.trace;

    let image = loader::load_program(&cli.program)?;
    debug!(words = image.len(), path = %cli.program.display(), "program loaded");

    let mut sim = Simulator::new(&image, &config)?;
    for (name, level) in config.cache.levels() {
        println!("Cache {name} has {level}");
    }

    let executed = if cli.quiet_log {
        sim.run(&mut NullSink)
    } else {
        sim.run(&mut StdoutSink)
    };
    debug!(executed, "simulation complete");

    print!("{}", sim.snapshot());
    if cli.stats {
        println!("{}", sim.stats);
    }
    Ok(())
}
