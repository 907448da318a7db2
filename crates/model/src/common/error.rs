//! Error types for the transport chain and the wiring layers.
//!
//! This module defines the error handling vocabulary for the simulator. It
//! provides:
//! 1. **Transport Failures:** Every way a single transaction can fail on its
//!    path from initiator to target.
//! 2. **Topology Errors:** Address-map violations detected at wiring time,
//!    before any simulation runs.
//! 3. **Configuration Errors:** I/O and parse failures while loading a config.
//!
//! Transport failures are reported synchronously to the immediate caller and
//! are never swallowed: a failed transaction is always distinguishable from a
//! completed one at the initiator.

use thiserror::Error;

use super::addr::{GlobalAddr, LocalAddr};

/// Failure of a single transaction somewhere on the transport chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The access window `address + length` exceeds the target's storage.
    ///
    /// Detected by the target after decode. The transaction has no effect:
    /// storage is untouched and no service latency is charged.
    #[error(
        "out-of-range access on '{target}': {addr} + {len} bytes exceeds storage of {size} bytes"
    )]
    OutOfRangeAccess {
        /// Name of the target that rejected the access.
        target: String,
        /// Target-local address of the attempted access.
        addr: LocalAddr,
        /// Requested access length in bytes.
        len: usize,
        /// Target storage size in bytes.
        size: usize,
    },

    /// No configured address range matches the transaction's address.
    ///
    /// Detected by the router; the transaction is not forwarded anywhere.
    #[error("unmapped address {addr} on '{router}'")]
    UnmappedAddress {
        /// Name of the router that failed the decode.
        router: String,
        /// The global address that matched no window.
        addr: GlobalAddr,
    },

    /// The request was invalid before it ever entered the chain.
    ///
    /// Detected at transaction construction: the requested length is zero or
    /// exceeds the caller-provided buffer capacity.
    #[error("malformed request: length {length} with buffer capacity {capacity}")]
    MalformedRequest {
        /// Requested transfer length in bytes.
        length: usize,
        /// Capacity of the caller-provided data buffer in bytes.
        capacity: usize,
    },
}

/// Address-map violation detected while wiring a topology.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// A window would overlap one that is already mapped.
    #[error(
        "window [{base:#x}, {base:#x}+{size:#x}) overlaps mapped window [{other_base:#x}, {other_base:#x}+{other_size:#x})"
    )]
    Overlap {
        /// Base of the rejected window.
        base: u64,
        /// Size of the rejected window.
        size: u64,
        /// Base of the already-mapped window it collides with.
        other_base: u64,
        /// Size of the already-mapped window it collides with.
        other_size: u64,
    },

    /// A window with zero length can never decode and is rejected outright.
    #[error("empty window at base {base:#x}")]
    EmptyWindow {
        /// Base of the rejected window.
        base: u64,
    },

    /// A window whose end would wrap past the top of the address space.
    #[error("window [{base:#x}, +{size:#x}) wraps past the end of the address space")]
    WrapsAddressSpace {
        /// Base of the rejected window.
        base: u64,
        /// Size of the rejected window.
        size: u64,
    },
}

/// Failure while loading or parsing a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON for the expected schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
