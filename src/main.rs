//! UART Peripheral Test Driver.
//!
//! The main executable for the peripheral model. It handles command-line
//! argument parsing, builds a peripheral instance from the TOML
//! configuration, and exercises the full register map through bus
//! transactions: enabling the device, transmitting characters, receiving a
//! character, and probing the error paths.
//!
//! All peripheral activity is reported through the logging facade; set
//! `RUST_LOG=debug` to also see the interrupt-enable decode and observer
//! callbacks.

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info};
use std::fs;

extern crate uart_peripheral;

use uart_peripheral::bus::{BusTarget, Transaction};
use uart_peripheral::config::Config;
use uart_peripheral::uart::{CtrlFlags, RegIndex, StatFlags, UartPeripheral};

/// Command-line arguments for the peripheral test driver.
#[derive(Parser, Debug)]
#[command(author, version, about = "Memory-mapped UART peripheral exerciser")]
struct Args {
    #[arg(short, long, default_value = "configs/default.toml")]
    config: String,
}

/// Main entry point for the test driver.
///
/// # Behavior
///
/// 1. **Configuration**: Parses command-line arguments and loads the TOML
///    configuration file.
/// 2. **Initialization**: Builds the peripheral and, if tracing is enabled,
///    attaches observer callbacks to every register access.
/// 3. **Exercise**: Drives the scripted transaction sequence against the
///    register map, including the rejected RX write and a misaligned access.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config_content = fs::read_to_string(&args.config)
        .with_context(|| format!("could not read config '{}'", args.config))?;
    let config: Config = toml::from_str(&config_content)
        .with_context(|| format!("could not parse config '{}'", args.config))?;

    let base = config.uart.base_val();
    println!("UART Peripheral Exerciser");
    println!("-------------------------");
    println!("Name:   {}", config.uart.name);
    println!("Base:   {:#010x}", base);
    println!("Register Map:");
    println!("  CTRL  @ {:#010x}", base + RegIndex::Ctrl.addr());
    println!("  STAT  @ {:#010x}", base + RegIndex::Stat.addr());
    println!("  TX    @ {:#010x}", base + RegIndex::Tx.addr());
    println!("  RX    @ {:#010x}", base + RegIndex::Rx.addr());
    println!("-------------------------");

    let mut uart = UartPeripheral::from_config(&config.uart);

    if config.general.trace_accesses {
        uart.set_write_observer(Box::new(|idx, value| {
            debug!("[observer] write {:?} = {:#010x}", idx, value);
        }));
        uart.set_read_observer(Box::new(|idx, value| {
            debug!("[observer] read {:?} = {:#010x}", idx, value);
        }));
    }

    info!("--- enable uart ---");
    write_reg(
        &mut uart,
        RegIndex::Ctrl.addr(),
        (CtrlFlags::ENABLE | CtrlFlags::TX_IRQ_EN).bits(),
    );

    info!("--- check transmitter status ---");
    let status = read_reg(&mut uart, RegIndex::Stat.addr());
    if StatFlags::from_bits_retain(status).contains(StatFlags::TX_READY) {
        info!("tx is ready");
    }

    info!("--- send characters ---");
    for ch in [b'A', b'B', b'C'] {
        write_reg(&mut uart, RegIndex::Tx.addr(), u32::from(ch));
    }

    info!("--- attempt write to rx register ---");
    write_reg(&mut uart, RegIndex::Rx.addr(), 0xFF);

    info!("--- receive a character ---");
    uart.receive_byte(0x5A);
    let rx = read_reg(&mut uart, RegIndex::Rx.addr());
    info!("received data: {:#04x}", rx & 0xFF);
    let status = read_reg(&mut uart, RegIndex::Stat.addr());
    if !StatFlags::from_bits_retain(status).contains(StatFlags::RX_VALID) {
        info!("rx valid cleared after read");
    }

    info!("--- misaligned access, expect address error ---");
    read_reg(&mut uart, 0x02);

    info!("--- disable uart ---");
    write_reg(&mut uart, RegIndex::Ctrl.addr(), 0);

    info!("exercise complete");
    Ok(())
}

/// Issues a word write transaction and reports a failed status.
fn write_reg(uart: &mut UartPeripheral, addr: u64, value: u32) {
    let mut trans = Transaction::write(addr, value);
    let mut delay_cycles = 0u64;
    uart.transact(&mut trans, &mut delay_cycles);
    if !trans.response_status().is_ok() {
        error!(
            "write failed at address {:#04x}: {:?}",
            addr,
            trans.response_status()
        );
    }
}

/// Issues a word read transaction and returns the value, or zero on error.
fn read_reg(uart: &mut UartPeripheral, addr: u64) -> u32 {
    let mut trans = Transaction::read(addr);
    let mut delay_cycles = 0u64;
    uart.transact(&mut trans, &mut delay_cycles);
    if !trans.response_status().is_ok() {
        error!(
            "read failed at address {:#04x}: {:?}",
            addr,
            trans.response_status()
        );
        return 0;
    }
    trans.data_word().unwrap_or(0)
}
