//! Transport capability for bus-attached components.
//!
//! This module defines the `Transport` trait implemented by every component a
//! transaction can be handed to. It provides:
//! 1. **Identification:** `name` for routing diagnostics and error reports.
//! 2. **Transport:** The single synchronous request/response entry point that
//!    both routers and targets expose, so topologies compose through one
//!    uniform contract.
//!
//! All implementors must be `Send + Sync` so systems can be embedded in
//! multi-threaded hosts.

use crate::common::{Delay, TransportError};
use crate::payload::Transaction;

/// The synchronous transport contract between adjacent components.
///
/// A caller passes a transaction by mutable reference together with the delay
/// accumulator for its path. The callee services or forwards the transaction,
/// adds its own latency to the accumulator, and returns before the caller
/// resumes; no simulated time passes during the call itself.
pub trait Transport: Send + Sync {
    /// Returns a short name for this component (e.g., `"bus0"`, `"mem0"`).
    fn name(&self) -> &str;

    /// Carries one transaction through this component.
    ///
    /// On success the transaction is `Completed`, its data buffer holds the
    /// read result (for reads), and `delay` has grown by the service latency
    /// of every component that did work. On failure the transaction is
    /// `Failed`, storage is untouched, and `delay` holds only what was
    /// accumulated before the failing hop.
    ///
    /// # Errors
    ///
    /// Any [`TransportError`] raised by this component or one it forwarded
    /// the transaction to.
    fn transport(
        &mut self,
        trans: &mut Transaction<'_>,
        delay: &mut Delay,
    ) -> Result<(), TransportError>;
}
