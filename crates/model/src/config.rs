//! Configuration for the interconnect simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! simulation. It provides:
//! 1. **Defaults:** Baseline constants reproducing the canonical scenario
//!    (one 256-byte preloaded memory at base 0, 10-unit access latency).
//! 2. **Structures:** Hierarchical config for the bus, the memory targets,
//!    and the initiator's workload.
//! 3. **Loading:** JSON deserialization from a string or a file.
//!
//! Configuration is supplied once before simulation starts; the wired
//! topology is immutable during a run.

use std::path::Path;

use serde::Deserialize;

use crate::common::ConfigError;
use crate::payload::Command;

/// Default configuration constants for the simulator.
mod defaults {
    /// Latency the bus charges per decoded transaction (none: the canonical
    /// single-range topology models a transparent decode).
    pub const BUS_LATENCY: u64 = 0;

    /// Base address of the default memory window.
    pub const MEM_BASE: u64 = 0x0;

    /// Size of the default memory in bytes.
    pub const MEM_SIZE: usize = 256;

    /// Bus window of the default memory. Wider than the storage itself, so
    /// decoded offsets past the end reach the target and are rejected there
    /// (the canonical out-of-range scenario).
    pub const MEM_WINDOW: u64 = 0x2000;

    /// Service latency per memory access in time units.
    pub const ACCESS_LATENCY: u64 = 10;

    /// Transfer length of a workload request when not given explicitly.
    pub const REQUEST_LENGTH: usize = 4;
}

/// Root configuration type; use [`Config::default`] for the canonical
/// scenario or deserialize from JSON.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Bus parameters.
    pub system: SystemConfig,
    /// Memory targets to map on the bus, one window each.
    pub memories: Vec<MemoryConfig>,
    /// Requests the initiator issues, in order.
    pub workload: Vec<RequestConfig>,
}

impl Default for Config {
    /// The canonical scenario: one preloaded 256-byte memory at base 0
    /// (visible through a wider window) and a workload of a 4-byte read at
    /// `0x1000` (decodes, then rejected out-of-range by the target) followed
    /// by a 1-byte read at `0x10` (returns 16).
    fn default() -> Self {
        Self {
            system: SystemConfig::default(),
            memories: vec![MemoryConfig::default()],
            workload: vec![
                RequestConfig {
                    command: Command::Read,
                    address: 0x1000,
                    length: 4,
                    data: None,
                },
                RequestConfig {
                    command: Command::Read,
                    address: 0x10,
                    length: 1,
                    data: None,
                },
            ],
        }
    }
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] when the JSON does not match the schema.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents do not match the schema.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// Bus parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SystemConfig {
    /// Latency the bus charges per decoded transaction.
    pub bus_latency: u64,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            bus_latency: defaults::BUS_LATENCY,
        }
    }
}

/// One memory target and the window it is mapped at.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MemoryConfig {
    /// Short name used in diagnostics and error reports.
    pub name: String,
    /// Global base address of the window.
    pub base: u64,
    /// Storage size in bytes.
    pub size: usize,
    /// Window size on the bus; defaults to the storage size when omitted. A
    /// window wider than storage exposes offsets the target rejects as
    /// out-of-range.
    #[serde(default)]
    pub window: Option<u64>,
    /// Service latency per access in time units.
    pub access_latency: u64,
    /// Initial storage contents.
    pub preload: PreloadPattern,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            name: "mem0".into(),
            base: defaults::MEM_BASE,
            size: defaults::MEM_SIZE,
            window: Some(defaults::MEM_WINDOW),
            access_latency: defaults::ACCESS_LATENCY,
            preload: PreloadPattern::ByteIndex,
        }
    }
}

/// Deterministic initial contents of a memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreloadPattern {
    /// All zeroes.
    Zero,
    /// `storage[i] = i mod 256`, so every offset is verifiable by a read.
    #[default]
    ByteIndex,
}

/// One request of the initiator's workload.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequestConfig {
    /// Operation to perform.
    pub command: Command,
    /// Global address of the access.
    pub address: u64,
    /// Transfer length in bytes.
    #[serde(default = "default_request_length")]
    pub length: usize,
    /// Bytes to write (write requests only; zeroes when omitted).
    #[serde(default)]
    pub data: Option<Vec<u8>>,
}

fn default_request_length() -> usize {
    defaults::REQUEST_LENGTH
}
