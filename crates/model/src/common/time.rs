//! Simulated time and delay accumulation.
//!
//! This module defines the timing vocabulary threaded through the transport
//! chain. It provides:
//! 1. **Points in Time:** `SimTime`, a logical timestamp with no dependency on
//!    the host clock; time advances only between scheduled activities.
//! 2. **Durations:** `Delay`, the accumulator each component adds its service
//!    latency to while a transaction is in flight.
//! 3. **Monotonicity:** Neither type exposes subtraction or reset, so an
//!    accumulated delay can only grow along the call chain.

use std::fmt;
use std::ops::{Add, AddAssign};

/// A point in simulated time, measured in time units since simulation start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SimTime(u64);

/// A simulated duration accumulated along a transaction's path.
///
/// Each component on the path may only add to a `Delay`; the accumulated
/// value is returned to the initiator, which hands it to the surrounding
/// driver to consume before the next transaction is issued.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Delay(u64);

impl SimTime {
    /// The zero point of simulated time.
    pub const ZERO: Self = Self(0);

    /// Creates a timestamp from a raw time-unit value.
    #[inline(always)]
    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    /// Returns the raw time-unit value.
    #[inline(always)]
    pub const fn val(self) -> u64 {
        self.0
    }
}

impl Delay {
    /// The empty delay, used to initialize an accumulator.
    pub const ZERO: Self = Self(0);

    /// Creates a delay from a raw time-unit value.
    #[inline(always)]
    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    /// Returns the raw time-unit value.
    #[inline(always)]
    pub const fn val(self) -> u64 {
        self.0
    }

    /// Returns whether no delay has been accumulated.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add<Delay> for SimTime {
    type Output = Self;

    /// Returns the timestamp `delay` time units after `self`.
    fn add(self, delay: Delay) -> Self {
        Self(self.0.saturating_add(delay.0))
    }
}

impl Add for Delay {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Delay {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} tu", self.0)
    }
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} tu", self.0)
    }
}
