//! UART Peripheral.
//!
//! This module implements the bus-facing peripheral: it composes the
//! register file with an access model, decodes addresses to registers,
//! validates incoming transactions, and notifies the optional read/write
//! observers. All accesses complete synchronously; the peripheral adds no
//! timing annotation of its own.

use log::{debug, error, info, warn};

use crate::bus::{BusTarget, ResponseStatus, Transaction, WORD_BYTES};
use crate::common::{AccessError, Command};
use crate::config::UartConfig;

use super::hooks::{DefaultModel, RegModel};
use super::regs::{RegIndex, RegisterFile, StatFlags, REG_SPAN};

/// Callback invoked after every successful bus write with the register
/// index and the value written.
pub type WriteObserver = Box<dyn FnMut(RegIndex, u32)>;

/// Callback invoked after every successful bus read with the register
/// index and the value read.
pub type ReadObserver = Box<dyn FnMut(RegIndex, u32)>;

/// Memory-mapped UART peripheral.
///
/// Owns the register file exclusively; the bus serializes transactions
/// into [`BusTarget::transact`], so no locking is involved. The peripheral
/// holds no state between transactions beyond the register values.
pub struct UartPeripheral {
    regs: RegisterFile,
    model: Box<dyn RegModel>,
    write_observer: Option<WriteObserver>,
    read_observer: Option<ReadObserver>,
}

impl UartPeripheral {
    /// Creates a peripheral with the stock access model.
    pub fn new(name: &str) -> Self {
        Self::with_model(name, Box::new(DefaultModel))
    }

    /// Creates a peripheral with a caller-supplied access model.
    pub fn with_model(name: &str, model: Box<dyn RegModel>) -> Self {
        info!("[{}] peripheral initialized", name);
        Self {
            regs: RegisterFile::new(name),
            model,
            write_observer: None,
            read_observer: None,
        }
    }

    /// Creates a peripheral from a configuration section.
    pub fn from_config(cfg: &UartConfig) -> Self {
        Self::new(&cfg.name)
    }

    /// Registers a callback to run after every successful bus write.
    pub fn set_write_observer(&mut self, cb: WriteObserver) {
        self.write_observer = Some(cb);
    }

    /// Registers a callback to run after every successful bus read.
    pub fn set_read_observer(&mut self, cb: ReadObserver) {
        self.read_observer = Some(cb);
    }

    /// Returns the register file for direct inspection.
    pub fn regs(&self) -> &RegisterFile {
        &self.regs
    }

    /// Returns the register file for direct state injection.
    ///
    /// Bypasses decode and side effects; intended for test harnesses.
    pub fn regs_mut(&mut self) -> &mut RegisterFile {
        &mut self.regs
    }

    /// Latches a received value into RX and raises RX_VALID.
    ///
    /// Models the external receive path; the register is single-slot, so
    /// an unread value is overwritten.
    pub fn receive_byte(&mut self, byte: u8) {
        self.regs.set(RegIndex::Rx, u32::from(byte));
        self.regs.update_stat(StatFlags::RX_VALID, StatFlags::empty());
        debug!("[{}] rx latched {:#04x}", self.regs.name(), byte);
    }

    /// Dispatches a decoded write to the addressed register.
    ///
    /// RX is hardware-read-only: writes to it are dropped with a warning,
    /// never reported as an error. Unknown addresses are warned no-ops.
    pub fn handle_write(&mut self, addr: u64, value: u32) {
        info!(
            "[{}] write reg[{}] @ {:#04x} = {:#010x}",
            self.regs.name(),
            addr / 4,
            addr,
            value
        );

        match RegIndex::from_addr(addr) {
            Some(RegIndex::Ctrl) => self.model.on_ctrl_write(&mut self.regs, value),
            Some(RegIndex::Stat) => self.model.on_stat_write(&mut self.regs, value),
            Some(RegIndex::Tx) => self.model.on_tx_write(&mut self.regs, value),
            Some(RegIndex::Rx) => {
                warn!(
                    "[{}] write to read-only rx register ignored",
                    self.regs.name()
                );
            }
            None => {
                warn!(
                    "[{}] write to unknown address {:#04x}",
                    self.regs.name(),
                    addr
                );
            }
        }
    }

    /// Dispatches a decoded read to the addressed register.
    ///
    /// Reading RX runs the receive side effect; CTRL, STAT, and TX read
    /// back their stored values. Unknown addresses read as zero.
    pub fn handle_read(&mut self, addr: u64) -> u32 {
        let value = match RegIndex::from_addr(addr) {
            Some(RegIndex::Ctrl) => self.regs.get(RegIndex::Ctrl),
            Some(RegIndex::Stat) => self.regs.get(RegIndex::Stat),
            Some(RegIndex::Tx) => self.regs.get(RegIndex::Tx),
            Some(RegIndex::Rx) => self.model.on_rx_read(&mut self.regs),
            None => {
                warn!(
                    "[{}] read from unknown address {:#04x}",
                    self.regs.name(),
                    addr
                );
                0
            }
        };

        info!(
            "[{}] read reg[{}] @ {:#04x} = {:#010x}",
            self.regs.name(),
            addr / 4,
            addr,
            value
        );

        value
    }

    /// Validates alignment, width, and range of a transaction.
    ///
    /// Alignment is checked before range, so a malformed address is
    /// reported as such even when it also falls outside the span.
    fn check_address(&self, trans: &Transaction) -> Result<RegIndex, AccessError> {
        let addr = trans.address;
        let len = trans.data.len();
        if addr % WORD_BYTES as u64 != 0 || len != WORD_BYTES {
            return Err(AccessError::Misaligned { addr, len });
        }
        if addr >= REG_SPAN {
            return Err(AccessError::OutOfRange { addr });
        }
        // Aligned and in span, so the address names one of the registers.
        RegIndex::from_addr(addr).ok_or(AccessError::OutOfRange { addr })
    }

    fn reject(&self, trans: &mut Transaction, err: AccessError) {
        error!("[{}] {}", self.regs.name(), err);
        trans.set_response_status(err.response_status());
    }
}

impl BusTarget for UartPeripheral {
    fn name(&self) -> &str {
        self.regs.name()
    }

    /// Services one transaction: validate, dispatch, notify, respond.
    ///
    /// Address checks run first, so a malformed address yields an address
    /// error regardless of the command. The delay annotation is passed
    /// through unmodified; this model is zero-latency.
    fn transact(&mut self, trans: &mut Transaction, _delay_cycles: &mut u64) {
        let idx = match self.check_address(trans) {
            Ok(idx) => idx,
            Err(err) => {
                self.reject(trans, err);
                return;
            }
        };
        let addr = trans.address;

        match trans.command {
            Command::Write => {
                let mut word = [0u8; WORD_BYTES];
                word.copy_from_slice(&trans.data);
                let value = u32::from_le_bytes(word);

                self.handle_write(addr, value);
                if let Some(cb) = self.write_observer.as_mut() {
                    cb(idx, value);
                }
                trans.set_response_status(ResponseStatus::Ok);
            }
            Command::Read => {
                let value = self.handle_read(addr);
                trans.data.copy_from_slice(&value.to_le_bytes());
                if let Some(cb) = self.read_observer.as_mut() {
                    cb(idx, value);
                }
                trans.set_response_status(ResponseStatus::Ok);
            }
            Command::Ignore => {
                self.reject(trans, AccessError::UnsupportedCommand);
            }
        }
    }
}
