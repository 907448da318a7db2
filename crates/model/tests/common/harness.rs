//! Topology builders shared across the unit tests.

use bussim_core::common::Delay;
use bussim_core::soc::interconnect::Bus;
use bussim_core::soc::memory::Memory;

/// Installs a test-writer tracing subscriber once per process.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

/// A zero-latency bus with one preloaded memory mapped at `base`, window
/// equal to the storage size.
pub fn bus_with_preloaded_memory(base: u64, size: usize, latency: u64) -> Bus {
    init_tracing();
    let mut bus = Bus::new("bus0", Delay::ZERO);
    let mem = Memory::preloaded("mem0", size, Delay::new(latency));
    bus.map(base, size as u64, Box::new(mem)).expect("map memory");
    bus
}
