//! Bus interconnect: decodes addresses and forwards transactions.
//!
//! This module implements the router of the transport chain. It provides:
//! 1. **Address Map:** Non-overlapping windows registered at wiring time and
//!    kept sorted by base address.
//! 2. **Decode and Translate:** Window lookup with a last-hit hint; the
//!    matching window's base is subtracted so the target sees a local offset.
//! 3. **Forwarding:** The transaction and its delay accumulator are handed to
//!    the selected target's transport entry point unchanged apart from the
//!    address translation.
//!
//! A bus implements [`Transport`] itself, so buses nest under other buses and
//! topologies of any depth compose without changing initiators or targets.

use tracing::{debug, warn};

use crate::common::{Delay, GlobalAddr, LocalAddr, MapError, TransportError};
use crate::payload::{Status, Transaction};
use crate::soc::traits::Transport;

/// One window of the address map: `[base, base + size)` routed to a target.
struct MapEntry {
    base: u64,
    size: u64,
    target: Box<dyn Transport>,
}

impl MapEntry {
    fn contains(&self, addr: u64) -> bool {
        addr >= self.base && addr - self.base < self.size
    }
}

/// Address-decoding router connecting an initiator to its targets.
///
/// The bus adds no latency of its own by default; a nonzero `latency` is the
/// extension point for modeling arbitration or contention without changing
/// the transport contract.
pub struct Bus {
    name: String,
    latency: Delay,
    entries: Vec<MapEntry>,
    last_idx: usize,
}

impl Bus {
    /// Creates a bus with an empty address map.
    ///
    /// # Arguments
    ///
    /// * `name` - Short name used in diagnostics and error reports.
    /// * `latency` - Latency the bus itself charges per decoded transaction.
    pub fn new(name: impl Into<String>, latency: Delay) -> Self {
        Self {
            name: name.into(),
            latency,
            entries: Vec::new(),
            last_idx: 0,
        }
    }

    /// Maps a target at the window `[base, base + size)`.
    ///
    /// Windows are kept sorted by base address for lookup. The map is part of
    /// the topology configuration: it is supplied before simulation starts
    /// and is not meant to change during a run.
    ///
    /// # Errors
    ///
    /// [`MapError::EmptyWindow`] for a zero-sized window,
    /// [`MapError::WrapsAddressSpace`] when `base + size` overflows, and
    /// [`MapError::Overlap`] when the window intersects one already mapped.
    pub fn map(&mut self, base: u64, size: u64, target: Box<dyn Transport>) -> Result<(), MapError> {
        if size == 0 {
            return Err(MapError::EmptyWindow { base });
        }
        let Some(end) = base.checked_add(size) else {
            return Err(MapError::WrapsAddressSpace { base, size });
        };
        for entry in &self.entries {
            if base < entry.base + entry.size && entry.base < end {
                return Err(MapError::Overlap {
                    base,
                    size,
                    other_base: entry.base,
                    other_size: entry.size,
                });
            }
        }
        self.entries.push(MapEntry { base, size, target });
        self.entries.sort_by_key(|e| e.base);
        self.last_idx = 0;
        Ok(())
    }

    /// Returns the number of mapped windows.
    pub fn window_count(&self) -> usize {
        self.entries.len()
    }

    /// Finds the window containing `addr`; returns its index and the
    /// target-local offset.
    fn decode(&mut self, addr: u64) -> Option<(usize, u64)> {
        if let Some(entry) = self.entries.get(self.last_idx) {
            if entry.contains(addr) {
                return Some((self.last_idx, addr - entry.base));
            }
        }

        for (i, entry) in self.entries.iter().enumerate() {
            if entry.contains(addr) {
                self.last_idx = i;
                return Some((i, addr - entry.base));
            }
        }
        None
    }
}

impl Transport for Bus {
    fn name(&self) -> &str {
        &self.name
    }

    fn transport(
        &mut self,
        trans: &mut Transaction<'_>,
        delay: &mut Delay,
    ) -> Result<(), TransportError> {
        if trans.status() == Status::Created {
            trans.begin_transit();
        }

        let addr = trans.address();
        let Some((idx, offset)) = self.decode(addr) else {
            trans.fail();
            warn!(
                component = %self.name,
                addr = %GlobalAddr::new(addr),
                "no window matches address"
            );
            return Err(TransportError::UnmappedAddress {
                router: self.name.clone(),
                addr: GlobalAddr::new(addr),
            });
        };

        *delay += self.latency;
        trans.set_address(offset);

        let entry = &mut self.entries[idx];
        debug!(
            component = %self.name,
            addr = %GlobalAddr::new(addr),
            local = %LocalAddr::new(offset),
            dest = entry.target.name(),
            "decoded address, forwarding"
        );
        let result = entry.target.transport(trans, delay);
        debug!(
            component = %self.name,
            dest = entry.target.name(),
            delay = delay.val(),
            completed = result.is_ok(),
            "transaction returned"
        );
        result
    }
}
