//! Transaction-level SoC interconnect simulator CLI.
//!
//! This binary wires a topology from a JSON config (or the built-in canonical
//! scenario), runs the workload to quiescence, and reports per-transaction
//! outcomes and run statistics. It performs:
//! 1. **Config loading:** `--config sim.json`, or defaults reproducing the
//!    canonical single-memory scenario.
//! 2. **Tracing:** `-v`/`-vv` map onto an env-filter (`RUST_LOG` overrides).
//! 3. **Reporting:** Human-readable outcome lines plus a statistics report,
//!    or machine-readable stats with `--json`.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bussim_core::core::TransactionOutcome;
use bussim_core::{Config, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "bussim",
    author,
    version,
    about = "Transaction-level SoC interconnect simulator",
    long_about = "Route a programmed workload of read/write transactions from a CPU initiator \
through an address-decoding bus to memory targets, accumulating simulated latency along the \
path.\n\nWithout --config, the canonical scenario runs: one 256-byte memory preloaded with \
mem[i] = i, a rejected 4-byte read at 0x1000, and a 1-byte read at 0x10 returning 16."
)]
struct Cli {
    /// JSON configuration file (built-in canonical scenario when omitted).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit run statistics as JSON instead of the text report.
    #[arg(long)]
    json: bool,

    /// Increase trace verbosity (-v: transactions, -vv: per-hop detail).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match cli.config {
        Some(path) => match Config::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading {}: {}", path.display(), e);
                process::exit(2);
            }
        },
        None => Config::default(),
    };

    let mut sim = match Simulator::from_config(&config) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Error wiring topology: {}", e);
            process::exit(2);
        }
    };

    let outcomes = sim.run();
    for outcome in &outcomes {
        println!("{}", describe(outcome));
    }

    if cli.json {
        match serde_json::to_string_pretty(sim.stats()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing stats: {}", e);
                process::exit(2);
            }
        }
    } else {
        println!();
        println!("{}", sim.stats());
    }

    if sim.stats().failed > 0 {
        process::exit(1);
    }
}

/// One human-readable line per transaction outcome.
fn describe(outcome: &TransactionOutcome) -> String {
    match &outcome.result {
        Ok(()) => format!(
            "[*] {} {:#x} ({} B) -> {:?}  latency {} tu, completed at {}",
            outcome.command,
            outcome.address,
            outcome.data.len(),
            outcome.data,
            outcome.latency.val(),
            outcome.finished_at,
        ),
        Err(e) => format!(
            "[!] {} {:#x} ({} B) -> FAILED: {}",
            outcome.command,
            outcome.address,
            outcome.data.len(),
            e,
        ),
    }
}

/// Installs the fmt subscriber; `RUST_LOG` wins over the verbosity flags.
fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
