//! Bus Transaction Payload.
//!
//! This module defines the request/response object exchanged between a bus
//! initiator and a target. A transaction carries a command, a byte address,
//! a data buffer, and a response status; it exists only for the duration of
//! one access and holds no reference to either endpoint.
//!
//! Data buffers are serialized in little-endian byte order on both the read
//! and write paths.

use crate::common::Command;

/// Width in bytes of a single register access.
pub const WORD_BYTES: usize = 4;

/// Outcome of a bus transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseStatus {
    /// The transaction has not been serviced yet.
    Incomplete,

    /// The access completed successfully.
    Ok,

    /// Misaligned, wrong-width, or out-of-range address.
    AddressError,

    /// The target does not implement the requested command.
    CommandError,
}

impl ResponseStatus {
    /// Returns `true` if the transaction completed successfully.
    pub fn is_ok(self) -> bool {
        self == ResponseStatus::Ok
    }
}

/// One bus read or write request/response exchange.
#[derive(Debug)]
pub struct Transaction {
    /// Requested operation.
    pub command: Command,
    /// Byte address of the access, relative to the target's base.
    pub address: u64,
    /// Data buffer; filled by the target on reads, consumed on writes.
    pub data: Vec<u8>,
    status: ResponseStatus,
}

impl Transaction {
    /// Creates a word-sized read transaction for the given address.
    pub fn read(address: u64) -> Self {
        Self {
            command: Command::Read,
            address,
            data: vec![0; WORD_BYTES],
            status: ResponseStatus::Incomplete,
        }
    }

    /// Creates a word-sized write transaction carrying `value`.
    pub fn write(address: u64, value: u32) -> Self {
        Self {
            command: Command::Write,
            address,
            data: value.to_le_bytes().to_vec(),
            status: ResponseStatus::Incomplete,
        }
    }

    /// Creates a no-data-transfer transaction for the given address.
    pub fn ignore(address: u64) -> Self {
        Self {
            command: Command::Ignore,
            address,
            data: vec![0; WORD_BYTES],
            status: ResponseStatus::Incomplete,
        }
    }

    /// Resizes the data buffer, for initiators issuing non-word accesses.
    pub fn with_data_len(mut self, len: usize) -> Self {
        self.data.resize(len, 0);
        self
    }

    /// Returns the current response status.
    pub fn response_status(&self) -> ResponseStatus {
        self.status
    }

    /// Records the outcome of the transaction.
    pub fn set_response_status(&mut self, status: ResponseStatus) {
        self.status = status;
    }

    /// Decodes the data buffer as a little-endian word.
    ///
    /// Returns `None` if the buffer is not word-sized.
    pub fn data_word(&self) -> Option<u32> {
        let bytes: [u8; WORD_BYTES] = self.data.as_slice().try_into().ok()?;
        Some(u32::from_le_bytes(bytes))
    }
}
