//! Access Error Types.
//!
//! Defines the error taxonomy for rejected bus transactions. Errors are
//! never propagated as panics or `Err` returns on the transact path; they
//! are translated into the transaction's response status and reported back
//! to the initiator.

use thiserror::Error;

use crate::bus::transaction::ResponseStatus;

/// A bus access the peripheral cannot service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessError {
    /// Address not word-aligned, or the data buffer is not word-sized.
    #[error("misaligned or wrong-width access at {addr:#06x} (len {len})")]
    Misaligned {
        /// Offending byte address.
        addr: u64,
        /// Length of the transaction's data buffer.
        len: usize,
    },

    /// Address falls outside the register span.
    #[error("address out of range: {addr:#06x}")]
    OutOfRange {
        /// Offending byte address.
        addr: u64,
    },

    /// Transaction command the peripheral does not implement.
    #[error("unsupported bus command")]
    UnsupportedCommand,
}

impl AccessError {
    /// Maps the error to the response status reported to the initiator.
    pub fn response_status(&self) -> ResponseStatus {
        match self {
            AccessError::Misaligned { .. } | AccessError::OutOfRange { .. } => {
                ResponseStatus::AddressError
            }
            AccessError::UnsupportedCommand => ResponseStatus::CommandError,
        }
    }
}
