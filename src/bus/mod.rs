//! Bus Transport Interface.
//!
//! This module defines the interface a memory-mapped peripheral exposes to
//! the system bus. The bus routes each transaction to the target mapped at
//! the transaction's address; the target services it in place and records
//! the outcome in the transaction's response status.

/// Transaction payload and response status types.
pub mod transaction;

pub use transaction::{ResponseStatus, Transaction, WORD_BYTES};

/// Trait for bus-addressable transaction targets.
///
/// A target services one transaction at a time, synchronously. The caller
/// owns time: the `delay_cycles` annotation accumulates any latency the
/// target wants to model, and the external scheduler applies it. This
/// peripheral is zero-latency and leaves the annotation untouched.
pub trait BusTarget {
    /// Returns the user-friendly name of the target.
    ///
    /// Used for debugging and logging purposes.
    fn name(&self) -> &str;

    /// Services one bus transaction, blocking until it completes.
    ///
    /// The target validates the transaction, performs the access, and sets
    /// the response status. A non-success status is the only failure
    /// channel; this call never panics on malformed transactions.
    ///
    /// # Arguments
    ///
    /// * `trans` - The transaction to service, updated in place
    /// * `delay_cycles` - Accumulated timing annotation, owned by the caller
    fn transact(&mut self, trans: &mut Transaction, delay_cycles: &mut u64);
}
