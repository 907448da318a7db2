//! Memory target: services transactions against bounded byte storage.
//!
//! This module implements the leaf component of the transport chain. It
//! provides:
//! 1. **Storage:** A fixed-size byte array, zero-filled or preloaded with a
//!    deterministic pattern for testability, never resized.
//! 2. **Access:** Read and write servicing with overflow-safe bounds checks;
//!    a rejected access touches nothing and charges no latency.
//! 3. **Timing:** A fixed per-access service latency added to the delay
//!    accumulator on every successful access.

use tracing::{debug, warn};

use crate::common::{Delay, LocalAddr, TransportError};
use crate::payload::{Command, Transaction};
use crate::soc::traits::Transport;

/// A memory target with bounded storage and fixed access latency.
///
/// Addresses arriving here are target-local offsets; the router upstream has
/// already translated them. Real memories vary latency with access pattern;
/// this model charges the same latency for every access, which is the
/// extension point a row-buffer-aware variant would replace.
pub struct Memory {
    name: String,
    storage: Vec<u8>,
    latency: Delay,
}

impl Memory {
    /// Creates a zero-filled memory.
    ///
    /// # Arguments
    ///
    /// * `name` - Short name used in diagnostics and error reports.
    /// * `size` - Storage size in bytes; fixed for the memory's lifetime.
    /// * `latency` - Service latency charged per successful access.
    pub fn new(name: impl Into<String>, size: usize, latency: Delay) -> Self {
        Self {
            name: name.into(),
            storage: vec![0; size],
            latency,
        }
    }

    /// Creates a memory preloaded with the deterministic byte-index pattern
    /// (`storage[i] = i mod 256`), so reads are verifiable before any write.
    pub fn preloaded(name: impl Into<String>, size: usize, latency: Delay) -> Self {
        let mut mem = Self::new(name, size, latency);
        for (i, byte) in mem.storage.iter_mut().enumerate() {
            *byte = i as u8;
        }
        mem
    }

    /// Splices a byte slice into storage at the given offset.
    ///
    /// Used to seed contents during system setup. Loads that would run past
    /// the end of storage are ignored.
    pub fn load(&mut self, data: &[u8], offset: usize) {
        match offset.checked_add(data.len()) {
            Some(end) if end <= self.storage.len() => {
                self.storage[offset..end].copy_from_slice(data);
            }
            _ => {}
        }
    }

    /// Returns the storage size in bytes.
    pub fn size(&self) -> usize {
        self.storage.len()
    }

    /// Checks that `addr + len` fits in storage; returns the storage range.
    fn check_bounds(&self, addr: u64, len: usize) -> Option<std::ops::Range<usize>> {
        let start = usize::try_from(addr).ok()?;
        let end = start.checked_add(len)?;
        (end <= self.storage.len()).then_some(start..end)
    }
}

impl Transport for Memory {
    fn name(&self) -> &str {
        &self.name
    }

    fn transport(
        &mut self,
        trans: &mut Transaction<'_>,
        delay: &mut Delay,
    ) -> Result<(), TransportError> {
        let addr = trans.address();
        let len = trans.length();

        let Some(range) = self.check_bounds(addr, len) else {
            trans.fail();
            warn!(
                component = %self.name,
                addr = %LocalAddr::new(addr),
                len,
                size = self.storage.len(),
                "rejected out-of-range access"
            );
            return Err(TransportError::OutOfRangeAccess {
                target: self.name.clone(),
                addr: LocalAddr::new(addr),
                len,
                size: self.storage.len(),
            });
        };

        match trans.command() {
            Command::Read => trans.payload_mut().copy_from_slice(&self.storage[range]),
            Command::Write => self.storage[range].copy_from_slice(trans.payload()),
        }

        *delay += self.latency;
        trans.complete();
        debug!(
            component = %self.name,
            cmd = %trans.command(),
            addr = %LocalAddr::new(addr),
            len,
            data = ?trans.payload(),
            "serviced access"
        );
        Ok(())
    }
}
