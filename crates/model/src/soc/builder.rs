//! System construction and top-level `System` type.
//!
//! This module wires the topology from configuration, once, before the
//! simulation starts. It performs:
//! 1. **Bus setup:** Creates the interconnect with the configured latency.
//! 2. **Target registration:** Instantiates one memory per configured region
//!    (zeroed or preloaded) and maps it at its window.
//!
//! The resulting topology is immutable during a run.

use crate::common::{Delay, MapError};
use crate::config::{Config, PreloadPattern};
use crate::soc::interconnect::Bus;
use crate::soc::memory::Memory;

/// Top-level system instance: the interconnect with all targets mapped.
pub struct System {
    /// The interconnect; routes transactions to the mapped targets.
    pub bus: Bus,
}

impl System {
    /// Builds a system from configuration.
    ///
    /// # Errors
    ///
    /// [`MapError`] when a configured memory window is empty, wraps the
    /// address space, or overlaps another window.
    pub fn new(config: &Config) -> Result<Self, MapError> {
        let mut bus = Bus::new("bus0", Delay::new(config.system.bus_latency));

        for region in &config.memories {
            let latency = Delay::new(region.access_latency);
            let mem = match region.preload {
                PreloadPattern::Zero => Memory::new(region.name.clone(), region.size, latency),
                PreloadPattern::ByteIndex => {
                    Memory::preloaded(region.name.clone(), region.size, latency)
                }
            };
            let window = region.window.unwrap_or(region.size as u64);
            bus.map(region.base, window, Box::new(mem))?;
        }

        Ok(Self { bus })
    }

    /// Consumes the system, yielding the bus to hand to an initiator as its
    /// socket.
    pub fn into_socket(self) -> Bus {
        self.bus
    }
}
