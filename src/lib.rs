//! Memory-Mapped UART Peripheral Model.
//!
//! This crate implements a UART peripheral for use inside a discrete-event
//! hardware simulation. The peripheral exposes four 32-bit registers
//! (control, status, transmit, receive) behind a blocking bus-transaction
//! interface, and can invoke user-supplied observer callbacks on every
//! register access.
//!
//! # Architecture
//!
//! * **Registers**: a fixed four-slot register file with address decode and
//!   per-register side effects (status-bit manipulation on TX write and
//!   RX read).
//! * **Transport**: a bus-target interface that validates each transaction
//!   (alignment, length, address range) and reports the outcome through the
//!   transaction's response status.
//! * **Hooks**: per-register access behavior is swappable through a model
//!   trait, so embedders can replace the default semantics of any register.
//!
//! # Modules
//!
//! * `bus`: bus-target trait and transaction payload types.
//! * `common`: shared command classification and error taxonomy.
//! * `config`: configuration loading and parsing.
//! * `uart`: the register file and peripheral implementation.

/// Bus-target trait and transaction payload types.
///
/// Defines the blocking transport interface the peripheral exposes to the
/// system bus, the transaction payload, and response statuses.
pub mod bus;

/// Shared types, command classification, and error taxonomy.
///
/// Provides the bus command enumeration and the access-error types used to
/// derive transaction response statuses.
pub mod common;

/// Configuration system for peripheral naming and address map settings.
///
/// Loads and parses TOML configuration files to customize the peripheral
/// instance and the driver's reporting.
pub mod config;

/// UART register file and peripheral implementation.
///
/// Implements register storage, the address-decode dispatch with its side
/// effects, the swappable per-register access model, and the bus-facing
/// transport adapter.
pub mod uart;
