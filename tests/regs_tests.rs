//! Integration tests for the register file and address decode.

use uart_peripheral::uart::{
    CtrlFlags, RegIndex, RegisterFile, StatFlags, UartPeripheral, REG_COUNT, REG_SPAN,
};

/// Tests register reset values.
#[test]
fn test_reset_values() {
    let regs = RegisterFile::new("uart0");
    assert_eq!(regs.get(RegIndex::Ctrl), 0);
    assert_eq!(regs.get(RegIndex::Stat), StatFlags::TX_READY.bits());
    assert_eq!(regs.get(RegIndex::Tx), 0);
    assert_eq!(regs.get(RegIndex::Rx), 0);
}

/// Tests the register span constants.
#[test]
fn test_register_span() {
    assert_eq!(REG_COUNT, 4);
    assert_eq!(REG_SPAN, 16);
}

/// Tests index-to-address mapping.
#[test]
fn test_index_to_address() {
    assert_eq!(RegIndex::Ctrl.addr(), 0x00);
    assert_eq!(RegIndex::Stat.addr(), 0x04);
    assert_eq!(RegIndex::Tx.addr(), 0x08);
    assert_eq!(RegIndex::Rx.addr(), 0x0C);
}

/// Tests address-to-index decoding for valid and invalid addresses.
#[test]
fn test_address_decode() {
    assert_eq!(RegIndex::from_addr(0x00), Some(RegIndex::Ctrl));
    assert_eq!(RegIndex::from_addr(0x04), Some(RegIndex::Stat));
    assert_eq!(RegIndex::from_addr(0x08), Some(RegIndex::Tx));
    assert_eq!(RegIndex::from_addr(0x0C), Some(RegIndex::Rx));

    assert_eq!(RegIndex::from_addr(0x02), None);
    assert_eq!(RegIndex::from_addr(0x10), None);
    assert_eq!(RegIndex::from_addr(0xFF), None);
}

/// Tests control register write and readback for a range of values.
#[test]
fn test_ctrl_write_readback() {
    let mut uart = UartPeripheral::new("uart0");

    for value in [0x0, 0x1, 0x3, 0x7, 0xDEAD_BEEF] {
        uart.handle_write(RegIndex::Ctrl.addr(), value);
        assert_eq!(uart.handle_read(RegIndex::Ctrl.addr()), value);
    }
}

/// Tests that a direct status write stores the raw value.
#[test]
fn test_stat_write_stores_raw_value() {
    let mut uart = UartPeripheral::new("uart0");

    uart.handle_write(RegIndex::Stat.addr(), 0x6);
    assert_eq!(uart.handle_read(RegIndex::Stat.addr()), 0x6);
}

/// Tests that writes to the read-only RX register are dropped.
#[test]
fn test_rx_write_ignored() {
    let mut uart = UartPeripheral::new("uart0");

    uart.handle_write(RegIndex::Rx.addr(), 0xFF);
    assert_eq!(uart.regs().get(RegIndex::Rx), 0);

    uart.receive_byte(0x42);
    uart.handle_write(RegIndex::Rx.addr(), 0xFF);
    assert_eq!(uart.regs().get(RegIndex::Rx), 0x42);
}

/// Tests the transmit side effect: ready is set and busy clear afterwards.
#[test]
fn test_tx_write_side_effects() {
    let mut uart = UartPeripheral::new("uart0");

    uart.handle_write(RegIndex::Tx.addr(), u32::from(b'A'));

    assert_eq!(uart.regs().get(RegIndex::Tx), u32::from(b'A'));
    let stat = uart.regs().stat();
    assert!(stat.contains(StatFlags::TX_READY));
    assert!(!stat.contains(StatFlags::TX_BUSY));
}

/// Tests that reading RX clears the RX_VALID status bit.
#[test]
fn test_rx_read_clears_rx_valid() {
    let mut uart = UartPeripheral::new("uart0");

    uart.regs_mut().set(RegIndex::Rx, 0x42);
    uart.regs_mut()
        .update_stat(StatFlags::RX_VALID, StatFlags::empty());
    assert!(uart.regs().stat().contains(StatFlags::RX_VALID));

    assert_eq!(uart.handle_read(RegIndex::Rx.addr()), 0x42);
    assert!(!uart.regs().stat().contains(StatFlags::RX_VALID));
}

/// Tests that reading STAT has no side effect on RX_VALID.
#[test]
fn test_stat_read_has_no_side_effect() {
    let mut uart = UartPeripheral::new("uart0");

    uart.regs_mut()
        .update_stat(StatFlags::RX_VALID, StatFlags::empty());
    let _ = uart.handle_read(RegIndex::Stat.addr());
    assert!(uart.regs().stat().contains(StatFlags::RX_VALID));
}

/// Tests that receive_byte latches the value and raises RX_VALID.
#[test]
fn test_receive_byte() {
    let mut uart = UartPeripheral::new("uart0");

    uart.receive_byte(0x5A);
    assert_eq!(uart.regs().get(RegIndex::Rx), 0x5A);
    assert!(uart.regs().stat().contains(StatFlags::RX_VALID));

    assert_eq!(uart.handle_read(RegIndex::Rx.addr()), 0x5A);
    assert!(!uart.regs().stat().contains(StatFlags::RX_VALID));
}

/// Tests that an unread receive value is overwritten by the next one.
#[test]
fn test_receive_byte_single_slot() {
    let mut uart = UartPeripheral::new("uart0");

    uart.receive_byte(0x11);
    uart.receive_byte(0x22);
    assert_eq!(uart.handle_read(RegIndex::Rx.addr()), 0x22);
}

/// Tests that reads from unknown addresses return zero.
#[test]
fn test_unknown_address_reads_zero() {
    let mut uart = UartPeripheral::new("uart0");
    assert_eq!(uart.handle_read(0x10), 0);
    assert_eq!(uart.handle_read(0x02), 0);
}

/// Tests that writes to unknown addresses leave all registers untouched.
#[test]
fn test_unknown_address_write_is_noop() {
    let mut uart = UartPeripheral::new("uart0");

    uart.handle_write(0x10, 0xFFFF_FFFF);

    assert_eq!(uart.regs().get(RegIndex::Ctrl), 0);
    assert_eq!(uart.regs().get(RegIndex::Stat), StatFlags::TX_READY.bits());
    assert_eq!(uart.regs().get(RegIndex::Tx), 0);
    assert_eq!(uart.regs().get(RegIndex::Rx), 0);
}

/// Tests that status updates preserve unrelated bits.
#[test]
fn test_update_stat_preserves_other_bits() {
    let mut regs = RegisterFile::new("uart0");

    regs.set(RegIndex::Stat, 0xF0 | StatFlags::TX_READY.bits());
    regs.update_stat(StatFlags::RX_VALID, StatFlags::TX_READY);

    assert_eq!(
        regs.get(RegIndex::Stat),
        0xF0 | StatFlags::RX_VALID.bits()
    );
}

/// Tests control flag bit positions.
#[test]
fn test_ctrl_flag_bits() {
    assert_eq!(CtrlFlags::ENABLE.bits(), 0x1);
    assert_eq!(CtrlFlags::TX_IRQ_EN.bits(), 0x2);
    assert_eq!(CtrlFlags::RX_IRQ_EN.bits(), 0x4);
}

/// Tests status flag bit positions.
#[test]
fn test_stat_flag_bits() {
    assert_eq!(StatFlags::TX_READY.bits(), 0x1);
    assert_eq!(StatFlags::RX_VALID.bits(), 0x2);
    assert_eq!(StatFlags::TX_BUSY.bits(), 0x4);
}
