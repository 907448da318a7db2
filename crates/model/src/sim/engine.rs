//! Simulator: owns the clock, the initiator, and the run statistics.
//!
//! The driver loop is the whole of the external scheduling substrate this
//! model needs: step the initiator, advance the clock by the delay each
//! transaction accumulated (success or failure alike), and stop when the
//! workload is exhausted.

use crate::common::MapError;
use crate::config::Config;
use crate::core::cpu::{Cpu, Request, TransactionOutcome};
use crate::sim::clock::SimClock;
use crate::soc::System;
use crate::stats::SimStats;

/// Top-level simulator: clock + initiator + statistics.
pub struct Simulator {
    /// The initiator driving the wired topology.
    pub cpu: Cpu,
    clock: SimClock,
    stats: SimStats,
}

impl Simulator {
    /// Creates a simulator around an already-wired system, programming the
    /// initiator with the configured workload.
    pub fn new(system: System, config: &Config) -> Self {
        let clock = SimClock::new();
        let mut cpu = Cpu::new("cpu0", Box::new(system.into_socket()), clock.clone());
        cpu.program(config.workload.iter().map(Request::from));
        Self {
            cpu,
            clock,
            stats: SimStats::new(),
        }
    }

    /// Wires a system from configuration and wraps it in a simulator.
    ///
    /// # Errors
    ///
    /// [`MapError`] when the configured topology is invalid.
    pub fn from_config(config: &Config) -> Result<Self, MapError> {
        Ok(Self::new(System::new(config)?, config))
    }

    /// Runs until quiescent: executes the programmed workload to exhaustion,
    /// advancing the clock between transactions, never during one.
    ///
    /// Returns the outcome of every transaction in issue order.
    pub fn run(&mut self) -> Vec<TransactionOutcome> {
        let mut outcomes = Vec::new();
        while let Some(outcome) = self.cpu.step() {
            let _ = self.clock.advance(outcome.latency);
            self.stats.record(&outcome);
            outcomes.push(outcome);
        }
        self.stats.finish(self.clock.now().val());
        outcomes
    }

    /// Returns the clock handle.
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Returns the statistics recorded so far.
    pub fn stats(&self) -> &SimStats {
        &self.stats
    }
}
