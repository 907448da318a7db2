//! Transaction payload: the request/response unit shared by all components.
//!
//! This module defines the value that flows through the transport chain. It
//! provides:
//! 1. **Command:** The operation a transaction performs (read or write).
//! 2. **Lifecycle:** The `Created -> InTransit -> {Completed | Failed}` state
//!    machine every layer observes.
//! 3. **Transaction:** Command, address, borrowed data buffer, and length,
//!    validated at construction so malformed requests never enter the chain.
//!
//! The data buffer is owned by the initiator for the transaction's whole
//! lifetime; routers and targets only read or write through the borrow and
//! never retain it past the call.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::TransportError;

/// The operation a transaction performs at its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    /// Copy bytes from target storage into the transaction's data buffer.
    Read,
    /// Copy bytes from the transaction's data buffer into target storage.
    Write,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "READ"),
            Self::Write => write!(f, "WRITE"),
        }
    }
}

/// Lifecycle state of a transaction.
///
/// A transaction is `Created` until it enters the chain, `InTransit` while on
/// it, and ends in exactly one of the terminal states. Terminal states are
/// never left; a transaction is not reusable after reaching one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    /// Constructed but not yet passed to a transport entry point.
    #[default]
    Created,
    /// Somewhere on the transport chain.
    InTransit,
    /// Serviced successfully by a target.
    Completed,
    /// Rejected by some component on the chain.
    Failed,
}

impl Status {
    /// Returns whether this is one of the terminal states.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// A single in-flight request.
///
/// The address is global (initiator view) when the transaction enters the
/// chain and target-relative after a router has decoded and translated it;
/// after the call returns it stays translated, matching the target-boundary
/// view of the contract.
#[derive(Debug)]
pub struct Transaction<'a> {
    command: Command,
    address: u64,
    data: &'a mut [u8],
    length: usize,
    status: Status,
}

impl<'a> Transaction<'a> {
    /// Builds a transaction, validating the request shape.
    ///
    /// # Arguments
    ///
    /// * `command` - Operation to perform.
    /// * `address` - Global address of the access.
    /// * `data` - Caller-owned buffer the operation moves bytes through.
    /// * `length` - Number of bytes the operation touches (1..=capacity).
    ///
    /// # Errors
    ///
    /// [`TransportError::MalformedRequest`] when `length` is zero or exceeds
    /// the buffer capacity. Address validation is deliberately *not* done
    /// here; that is the target's responsibility after decode.
    pub fn new(
        command: Command,
        address: u64,
        data: &'a mut [u8],
        length: usize,
    ) -> Result<Self, TransportError> {
        if length == 0 || length > data.len() {
            return Err(TransportError::MalformedRequest {
                length,
                capacity: data.len(),
            });
        }
        Ok(Self {
            command,
            address,
            data,
            length,
            status: Status::Created,
        })
    }

    /// Builds a read transaction covering the whole buffer.
    ///
    /// # Errors
    ///
    /// [`TransportError::MalformedRequest`] when the buffer is empty.
    pub fn read(address: u64, data: &'a mut [u8]) -> Result<Self, TransportError> {
        let length = data.len();
        Self::new(Command::Read, address, data, length)
    }

    /// Builds a write transaction covering the whole buffer.
    ///
    /// # Errors
    ///
    /// [`TransportError::MalformedRequest`] when the buffer is empty.
    pub fn write(address: u64, data: &'a mut [u8]) -> Result<Self, TransportError> {
        let length = data.len();
        Self::new(Command::Write, address, data, length)
    }

    /// Returns the command.
    #[inline]
    pub const fn command(&self) -> Command {
        self.command
    }

    /// Returns the current address.
    ///
    /// Global before decode, target-relative after a router has translated it.
    #[inline]
    pub const fn address(&self) -> u64 {
        self.address
    }

    /// Rewrites the address; used by routers to translate a global address
    /// into the selected target's local offset space.
    #[inline]
    pub const fn set_address(&mut self, address: u64) {
        self.address = address;
    }

    /// Returns the number of bytes this transaction touches.
    #[inline]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Returns the bytes the operation covers (the first `length` bytes of
    /// the data buffer).
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.data[..self.length]
    }

    /// Returns the covered bytes mutably; targets write read results here.
    #[inline]
    pub fn payload_mut(&mut self) -> &mut [u8] {
        &mut self.data[..self.length]
    }

    /// Returns the lifecycle state.
    #[inline]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Marks the transaction as on the chain.
    ///
    /// Terminal transactions must not re-enter the chain; that is a harness
    /// bug, not a transaction failure.
    #[inline]
    pub fn begin_transit(&mut self) {
        debug_assert!(!self.status.is_terminal(), "transaction reused after completion");
        self.status = Status::InTransit;
    }

    /// Marks the transaction as successfully serviced.
    #[inline]
    pub fn complete(&mut self) {
        debug_assert!(!self.status.is_terminal(), "transaction reused after completion");
        self.status = Status::Completed;
    }

    /// Marks the transaction as failed.
    #[inline]
    pub fn fail(&mut self) {
        debug_assert!(!self.status.is_terminal(), "transaction reused after completion");
        self.status = Status::Failed;
    }
}
