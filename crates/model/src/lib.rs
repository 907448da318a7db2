//! Transaction-level SoC interconnect simulator library.
//!
//! This crate models, at transaction level, how a processing element issues a
//! memory access that is routed through an interconnect to a storage target,
//! with simulated latency accumulated along the path. It implements:
//! 1. **Payload:** The transaction value (command, address, borrowed data
//!    buffer, length, lifecycle state) shared by all components.
//! 2. **SoC:** The bus interconnect (address decode, translation, forwarding)
//!    and memory targets (bounded storage, fixed access latency).
//! 3. **Core:** The CPU initiator with its programmed workload and
//!    per-transaction outcome reporting.
//! 4. **Simulation:** A shared monotonic clock and a run-until-quiescent
//!    driver loop, plus configuration and statistics.
//!
//! The whole transport chain is synchronous: one call carries a transaction
//! from initiator to target and back, and simulated time advances only
//! between transactions, by the delay each one returned.

/// Common types (addresses, time, errors).
pub mod common;
/// Simulator configuration (defaults, hierarchical structures, JSON loading).
pub mod config;
/// Initiator-side components (CPU, requests, outcomes).
pub mod core;
/// Transaction payload and lifecycle.
pub mod payload;
/// Simulation substrate (clock, driver loop).
pub mod sim;
/// System-on-chip components (bus, memory, transport trait, builder).
pub mod soc;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// The initiator type; holds the socket into the interconnect and a workload.
pub use crate::core::Cpu;
/// Top-level simulator; construct with `Simulator::from_config`.
pub use crate::sim::Simulator;
/// Top-level system (bus with mapped targets); construct with `System::new`.
pub use crate::soc::System;
