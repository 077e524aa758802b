//! Bus Command Types.
//!
//! This module defines the classification of bus transactions used by the
//! transport interface. The transport adapter dispatches on these commands
//! to select between register reads, register writes, and no-data probes.

/// Type of bus transaction operation.
///
/// Carried inside a transaction payload to tell the target what kind of
/// access is being performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Data read access.
    ///
    /// The target fills the transaction's data buffer with the value read
    /// from the addressed register.
    Read,

    /// Data write access.
    ///
    /// The target consumes the transaction's data buffer and stores it to
    /// the addressed register.
    Write,

    /// No data transfer.
    ///
    /// Used by transport layers to route a payload without accessing the
    /// target's state. This peripheral does not support it and reports a
    /// command error.
    Ignore,
}
