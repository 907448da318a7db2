//! CPU initiator: originates transactions and drives them through its socket.
//!
//! This module implements the origin of the transport chain. It provides:
//! 1. **Workload:** A programmed queue of requests executed strictly in
//!    order; no request is issued before the previous call has returned.
//! 2. **Execution:** Transaction construction over a locally-owned buffer,
//!    the synchronous socket call, and outcome observation.
//! 3. **Reporting:** Every executed request yields a [`TransactionOutcome`]
//!    carrying the result, the data, the accumulated latency, and the
//!    completion time (call-start time plus final delay); failed
//!    transactions are always distinguishable from completed ones.
//!
//! The initiator never retries; retry policy, if any, belongs to whatever
//! drives the initiator.

use std::collections::VecDeque;

use tracing::{info, warn};

use crate::common::{Delay, GlobalAddr, SimTime, TransportError};
use crate::config::RequestConfig;
use crate::payload::{Command, Transaction};
use crate::sim::clock::SimClock;
use crate::soc::traits::Transport;

/// One programmed request for the initiator.
#[derive(Debug, Clone)]
pub struct Request {
    /// Operation to perform.
    pub command: Command,
    /// Global address of the access.
    pub address: u64,
    /// Transfer length in bytes.
    pub length: usize,
    /// Bytes to write (write requests only; zeroes when omitted).
    pub data: Option<Vec<u8>>,
}

impl Request {
    /// A read of `length` bytes at `address`.
    pub const fn read(address: u64, length: usize) -> Self {
        Self {
            command: Command::Read,
            address,
            length,
            data: None,
        }
    }

    /// A write of `data` at `address`.
    pub fn write(address: u64, data: Vec<u8>) -> Self {
        Self {
            command: Command::Write,
            address,
            length: data.len(),
            data: Some(data),
        }
    }
}

impl From<&RequestConfig> for Request {
    fn from(cfg: &RequestConfig) -> Self {
        Self {
            command: cfg.command,
            address: cfg.address,
            length: cfg.length,
            data: cfg.data.clone(),
        }
    }
}

/// What the initiator observed for one executed transaction.
#[derive(Debug, Clone)]
pub struct TransactionOutcome {
    /// Operation that was requested.
    pub command: Command,
    /// Global address as issued (pre-decode view).
    pub address: u64,
    /// The data buffer after the call: the read result for completed reads,
    /// the written bytes for writes, untouched zeroes for failures.
    pub data: Vec<u8>,
    /// Delay accumulated along the path, including partial delay accumulated
    /// before a failure.
    pub latency: Delay,
    /// Simulated time when the transaction was issued.
    pub issued_at: SimTime,
    /// `issued_at` plus the accumulated delay.
    pub finished_at: SimTime,
    /// Success, or the failure the chain reported.
    pub result: Result<(), TransportError>,
}

impl TransactionOutcome {
    /// Returns whether the transaction completed successfully.
    #[inline]
    pub const fn is_completed(&self) -> bool {
        self.result.is_ok()
    }
}

/// The initiator: owns its socket into the interconnect and a programmed
/// request queue.
///
/// The clock handle is used only to timestamp outcomes; consuming the
/// returned delay (advancing simulated time) is the driver's job.
pub struct Cpu {
    name: String,
    socket: Box<dyn Transport>,
    clock: SimClock,
    program: VecDeque<Request>,
}

impl Cpu {
    /// Creates an initiator attached to the given socket.
    pub fn new(name: impl Into<String>, socket: Box<dyn Transport>, clock: SimClock) -> Self {
        Self {
            name: name.into(),
            socket,
            clock,
            program: VecDeque::new(),
        }
    }

    /// Appends one request to the programmed workload.
    pub fn enqueue(&mut self, request: Request) {
        self.program.push_back(request);
    }

    /// Appends a whole workload in order.
    pub fn program<I: IntoIterator<Item = Request>>(&mut self, requests: I) {
        self.program.extend(requests);
    }

    /// Returns whether the programmed workload is exhausted.
    pub fn is_idle(&self) -> bool {
        self.program.is_empty()
    }

    /// Executes the next programmed request, or returns `None` when idle.
    pub fn step(&mut self) -> Option<TransactionOutcome> {
        let request = self.program.pop_front()?;
        Some(self.execute(request))
    }

    /// Executes one request synchronously and reports what happened.
    ///
    /// The data buffer lives on this call's stack frame for the whole
    /// transaction; the chain only borrows it.
    pub fn execute(&mut self, request: Request) -> TransactionOutcome {
        let Request {
            command,
            address,
            length,
            data,
        } = request;
        let mut buf = data.unwrap_or_else(|| vec![0; length]);

        let issued_at = self.clock.now();
        let mut delay = Delay::ZERO;

        let result = match Transaction::new(command, address, &mut buf, length) {
            Ok(mut trans) => {
                info!(
                    component = %self.name,
                    cmd = %command,
                    addr = %GlobalAddr::new(address),
                    len = length,
                    at = %issued_at,
                    "issuing transaction"
                );
                trans.begin_transit();
                self.socket.transport(&mut trans, &mut delay)
            }
            Err(e) => Err(e),
        };

        let finished_at = issued_at + delay;
        match &result {
            Ok(()) => info!(
                component = %self.name,
                at = %finished_at,
                latency = delay.val(),
                "transaction completed"
            ),
            Err(e) => warn!(
                component = %self.name,
                error = %e,
                at = %finished_at,
                "transaction failed"
            ),
        }

        TransactionOutcome {
            command,
            address,
            data: buf,
            latency: delay,
            issued_at,
            finished_at,
            result,
        }
    }

    /// Issues a read of `length` bytes at `address` and waits for it.
    pub fn read(&mut self, address: u64, length: usize) -> TransactionOutcome {
        self.execute(Request::read(address, length))
    }

    /// Issues a write of `data` at `address` and waits for it.
    pub fn write(&mut self, address: u64, data: Vec<u8>) -> TransactionOutcome {
        self.execute(Request::write(address, data))
    }
}
