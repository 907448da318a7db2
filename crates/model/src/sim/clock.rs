//! Shared simulated clock.
//!
//! The clock is an injected capability, never a process-wide singleton:
//! every component that wants to timestamp an observation holds a clone of
//! the handle. Only the driver loop advances it, and only by accumulated
//! transaction delays, so it is monotonically non-decreasing by
//! construction.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::common::{Delay, SimTime};

/// Cloneable handle to the simulation's clock.
///
/// Components use [`SimClock::now`] for reporting and observability only,
/// never for control decisions; time advancement is the driver's job.
#[derive(Clone, Debug, Default)]
pub struct SimClock {
    units: Arc<AtomicU64>,
}

impl SimClock {
    /// Creates a clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current simulated time.
    pub fn now(&self) -> SimTime {
        SimTime::new(self.units.load(Ordering::Relaxed))
    }

    /// Advances the clock by `delay` and returns the new time.
    ///
    /// Called by the driver loop between transactions; simulated time never
    /// moves during a transport call.
    pub fn advance(&self, delay: Delay) -> SimTime {
        let before = self.units.fetch_add(delay.val(), Ordering::Relaxed);
        SimTime::new(before.saturating_add(delay.val()))
    }
}
