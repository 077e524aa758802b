//! Per-Register Access Model.
//!
//! Register access behavior is swappable behind the [`RegModel`] trait.
//! The provided default methods implement the stock UART semantics; an
//! embedder can override any subset to customize what a control write, a
//! transmit, or a receive actually does, without touching the address
//! decode or the transport layer.

use log::{debug, info, warn};

use super::regs::{CtrlFlags, RegIndex, RegisterFile, StatFlags};

/// Behavior attached to the registers with access side effects.
///
/// Each method receives the register file and applies both the value
/// update and any status-bit side effects. Implementations that only
/// want to tweak one register keep the provided defaults for the rest.
pub trait RegModel {
    /// Handles a write to the control register.
    fn on_ctrl_write(&mut self, regs: &mut RegisterFile, value: u32) {
        default_ctrl_write(regs, value);
    }

    /// Handles a write to the status register.
    fn on_stat_write(&mut self, regs: &mut RegisterFile, value: u32) {
        default_stat_write(regs, value);
    }

    /// Handles a write to the transmit register.
    fn on_tx_write(&mut self, regs: &mut RegisterFile, value: u32) {
        default_tx_write(regs, value);
    }

    /// Handles a read from the receive register and returns the value.
    fn on_rx_read(&mut self, regs: &mut RegisterFile) -> u32 {
        default_rx_read(regs)
    }
}

/// The stock access model, using the default behavior for every register.
pub struct DefaultModel;

impl RegModel for DefaultModel {}

/// Stores the control value and reports the decoded enable bits.
///
/// The bits are inspected purely for observability; no further state
/// changes.
pub fn default_ctrl_write(regs: &mut RegisterFile, value: u32) {
    regs.set(RegIndex::Ctrl, value);

    let ctrl = CtrlFlags::from_bits_retain(value);
    if ctrl.contains(CtrlFlags::ENABLE) {
        info!("[{}] enabled", regs.name());
    } else {
        info!("[{}] disabled", regs.name());
    }
    if ctrl.contains(CtrlFlags::TX_IRQ_EN) {
        debug!("[{}] tx interrupt enabled", regs.name());
    }
    if ctrl.contains(CtrlFlags::RX_IRQ_EN) {
        debug!("[{}] rx interrupt enabled", regs.name());
    }
}

/// Stores a raw value into the status register.
///
/// The status register is normally derived state; the direct write path
/// stays open so a test harness can inject status bits.
pub fn default_stat_write(regs: &mut RegisterFile, value: u32) {
    regs.set(RegIndex::Stat, value);
    warn!(
        "[{}] direct write to status register (normally read-only)",
        regs.name()
    );
}

/// Stores the transmit value and performs the transmit side effect.
///
/// The busy period is zero-duration in this model: TX_BUSY is raised and
/// dropped within the same access, leaving TX_READY set afterwards.
pub fn default_tx_write(regs: &mut RegisterFile, value: u32) {
    regs.set(RegIndex::Tx, value);

    let byte = (value & 0xFF) as u8;
    info!(
        "[{}] tx character {:#04x} ('{}')",
        regs.name(),
        byte,
        printable(byte)
    );

    regs.update_stat(StatFlags::TX_BUSY, StatFlags::TX_READY);
    regs.update_stat(StatFlags::TX_READY, StatFlags::TX_BUSY);
}

/// Returns the receive value and clears RX_VALID.
pub fn default_rx_read(regs: &mut RegisterFile) -> u32 {
    let value = regs.get(RegIndex::Rx);
    regs.update_stat(StatFlags::empty(), StatFlags::RX_VALID);
    info!("[{}] rx character {:#04x}", regs.name(), value & 0xFF);
    value
}

fn printable(byte: u8) -> char {
    if byte.is_ascii_graphic() || byte == b' ' {
        byte as char
    } else {
        '?'
    }
}
