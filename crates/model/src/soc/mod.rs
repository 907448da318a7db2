//! System-on-chip components.
//!
//! This module organizes the routing-and-servicing side of the model: the
//! bus interconnect, the memory targets, the transport capability they share,
//! and the builder that assembles a system from configuration.

/// System builder wiring the configured topology.
pub mod builder;

/// Bus interconnect: address decode and forwarding.
pub mod interconnect;

/// Memory target implementation.
pub mod memory;

/// Transport capability trait shared by routers and targets.
pub mod traits;

pub use builder::System;
