//! UART Register File.
//!
//! Register map (byte-addressed, word accesses only):
//!
//! | Offset | Name | Access | Reset |
//! |--------|------|--------|-------|
//! | 0x00   | CTRL | R/W    | 0x0   |
//! | 0x04   | STAT | R/W    | 0x1   |
//! | 0x08   | TX   | W      | 0x0   |
//! | 0x0C   | RX   | R      | 0x0   |
//!
//! STAT is conventionally read-only from the bus; direct writes are kept
//! as a test and debug affordance.

use bitflags::bitflags;

/// Number of registers exposed by the peripheral.
pub const REG_COUNT: usize = 4;

/// Addressable byte span of the register file.
pub const REG_SPAN: u64 = REG_COUNT as u64 * 4;

bitflags! {
    /// Control register bits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct CtrlFlags: u32 {
        /// Peripheral enable.
        const ENABLE = 1 << 0;
        /// Transmit interrupt enable.
        const TX_IRQ_EN = 1 << 1;
        /// Receive interrupt enable.
        const RX_IRQ_EN = 1 << 2;
    }
}

bitflags! {
    /// Status register bits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct StatFlags: u32 {
        /// Transmitter can accept a character.
        const TX_READY = 1 << 0;
        /// Receive register holds an unread value.
        const RX_VALID = 1 << 1;
        /// Transmission in progress.
        const TX_BUSY = 1 << 2;
    }
}

/// Index of a register within the file.
///
/// The byte address of a register is its index times the word size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum RegIndex {
    /// Control register.
    Ctrl = 0,
    /// Status register.
    Stat = 1,
    /// Transmit data register.
    Tx = 2,
    /// Receive data register.
    Rx = 3,
}

impl RegIndex {
    /// Returns the byte address of this register.
    pub const fn addr(self) -> u64 {
        self as u64 * 4
    }

    /// Decodes a byte address to a register index.
    ///
    /// Returns `None` for misaligned or out-of-span addresses.
    pub fn from_addr(addr: u64) -> Option<Self> {
        match addr {
            0x00 => Some(RegIndex::Ctrl),
            0x04 => Some(RegIndex::Stat),
            0x08 => Some(RegIndex::Tx),
            0x0C => Some(RegIndex::Rx),
            _ => None,
        }
    }
}

/// The four addressable 32-bit state slots of the peripheral.
///
/// Plain storage with direct get/set access; address decode and access
/// side effects live in the peripheral that composes this file.
pub struct RegisterFile {
    regs: [u32; REG_COUNT],
    name: String,
}

impl RegisterFile {
    /// Creates a register file with reset values applied.
    ///
    /// CTRL, TX, and RX reset to zero; STAT resets with TX_READY set.
    pub fn new(name: &str) -> Self {
        let mut regs = [0u32; REG_COUNT];
        regs[RegIndex::Stat as usize] = StatFlags::TX_READY.bits();
        Self {
            regs,
            name: String::from(name),
        }
    }

    /// Returns the display name used in log events.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reads a register directly, bypassing access side effects.
    pub fn get(&self, idx: RegIndex) -> u32 {
        self.regs[idx as usize]
    }

    /// Writes a register directly, bypassing access side effects.
    pub fn set(&mut self, idx: RegIndex, value: u32) {
        self.regs[idx as usize] = value;
    }

    /// Returns the status register as typed flags.
    pub fn stat(&self) -> StatFlags {
        StatFlags::from_bits_retain(self.get(RegIndex::Stat))
    }

    /// Sets and clears status bits in one update.
    ///
    /// Bits outside the named flags are preserved.
    pub fn update_stat(&mut self, set: StatFlags, clear: StatFlags) {
        let mut stat = self.stat();
        stat.remove(clear);
        stat.insert(set);
        self.set(RegIndex::Stat, stat.bits());
    }
}
