//! Simulation statistics collection and reporting.
//!
//! This module tracks what a simulation run did. It provides:
//! 1. **Transaction Counts:** Issued, completed, and failed (split by failure
//!    kind).
//! 2. **Traffic:** Read/write mix and bytes moved through targets.
//! 3. **Timing:** Total accumulated transaction latency and the final
//!    simulated time.

use std::fmt;
use std::time::Instant;

use serde::Serialize;

use crate::common::TransportError;
use crate::core::cpu::TransactionOutcome;
use crate::payload::Command;

/// Statistics for one simulation run.
#[derive(Clone, Debug, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    /// Transactions issued by the initiator.
    pub transactions: u64,
    /// Transactions that completed successfully.
    pub completed: u64,
    /// Transactions that failed anywhere on the chain.
    pub failed: u64,
    /// Failed with an unmapped address at a router.
    pub unmapped: u64,
    /// Failed with an out-of-range access at a target.
    pub out_of_range: u64,
    /// Rejected as malformed before entering the chain.
    pub malformed: u64,
    /// Read transactions issued.
    pub reads: u64,
    /// Write transactions issued.
    pub writes: u64,
    /// Bytes successfully read from targets.
    pub bytes_read: u64,
    /// Bytes successfully written to targets.
    pub bytes_written: u64,
    /// Sum of accumulated delays across all transactions, in time units.
    pub total_latency: u64,
    /// Simulated time when the run went quiescent, in time units.
    pub sim_time: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self::new()
    }
}

impl SimStats {
    /// Creates an empty statistics record.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            transactions: 0,
            completed: 0,
            failed: 0,
            unmapped: 0,
            out_of_range: 0,
            malformed: 0,
            reads: 0,
            writes: 0,
            bytes_read: 0,
            bytes_written: 0,
            total_latency: 0,
            sim_time: 0,
        }
    }

    /// Folds one transaction outcome into the record.
    pub fn record(&mut self, outcome: &TransactionOutcome) {
        self.transactions += 1;
        self.total_latency += outcome.latency.val();

        let bytes = outcome.data.len() as u64;
        match outcome.command {
            Command::Read => {
                self.reads += 1;
                if outcome.is_completed() {
                    self.bytes_read += bytes;
                }
            }
            Command::Write => {
                self.writes += 1;
                if outcome.is_completed() {
                    self.bytes_written += bytes;
                }
            }
        }

        match &outcome.result {
            Ok(()) => self.completed += 1,
            Err(e) => {
                self.failed += 1;
                match e {
                    TransportError::UnmappedAddress { .. } => self.unmapped += 1,
                    TransportError::OutOfRangeAccess { .. } => self.out_of_range += 1,
                    TransportError::MalformedRequest { .. } => self.malformed += 1,
                }
            }
        }
    }

    /// Stamps the final simulated time, called once when the run goes
    /// quiescent.
    pub fn finish(&mut self, sim_time: u64) {
        self.sim_time = sim_time;
    }

    /// Host wall-clock seconds since this record was created.
    pub fn host_elapsed_secs(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "── simulation report ──")?;
        writeln!(
            f,
            "transactions : {} ({} completed, {} failed)",
            self.transactions, self.completed, self.failed
        )?;
        if self.failed > 0 {
            writeln!(
                f,
                "failures     : {} unmapped, {} out-of-range, {} malformed",
                self.unmapped, self.out_of_range, self.malformed
            )?;
        }
        writeln!(
            f,
            "traffic      : {} reads ({} B), {} writes ({} B)",
            self.reads, self.bytes_read, self.writes, self.bytes_written
        )?;
        writeln!(f, "latency      : {} tu accumulated", self.total_latency)?;
        write!(f, "sim time     : {} tu", self.sim_time)
    }
}
