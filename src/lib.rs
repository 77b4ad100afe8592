//! # netshell - serial network shell for embedded devices
//!
//! An interactive, line-oriented command shell that runs over a serial link
//! and lets an operator inspect and control a device's network connectivity
//! without re-flashing firmware. It is designed for embedded systems and
//! supports `no_std` environments.
//!
//! ## Features
//!
//! ### Shell
//! - **Line input**: byte-at-a-time reading with optional echo and hidden input
//! - **Bounded tokenizer**: fixed-capacity arguments that never overflow
//! - **Static command table**: `help`, `info`, `status`, `list-networks`,
//!   `connect`, `reconnect`, `disconnect`, `set-mode`, `set-autoconnect`,
//!   `set-autoreconnect`, `set-persistence`, `boot`, `exit`
//! - **Bounded waits**: connection commands and the entry gate give up after a
//!   deadline instead of blocking the device
//!
//! ### Capabilities
//! - [`io::Transport`]: the serial link
//! - [`network::Network`]: the device's network stack
//! - [`system::Platform`]: clock, delay and watchdog
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! netshell = "0.1.0"
//! ```
//!
//! ### Running the shell
//!
//! ```rust,no_run
//! use netshell::io::Transport;
//! use netshell::network::Network;
//! use netshell::system::Platform;
//! use netshell::system::shell::Shell;
//!
//! fn boot<T: Transport, N: Network, P: Platform>(uart: T, wifi: N, board: P) {
//!     let mut shell = Shell::new(uart, wifi, board);
//!     match shell.auto_launch(5) {
//!         Ok(true) => { /* operator used the shell, then typed `exit` */ }
//!         Ok(false) => { /* nobody pressed a key */ }
//!         Err(_) => { /* serial link failed */ }
//!     }
//!     // continue with the main application
//! }
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (Xtensa, RISC-V, ARM Cortex-M, etc.)
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

#[macro_use]
mod fmt;

/// Serial transport abstraction and console output helpers.
pub mod io;

/// Network capability consumed by the shell.
///
/// Describes the connectivity operations a device's network stack must
/// provide: association, scanning, mode and persistence settings.
pub mod network;

/// The shell itself and its building blocks.
///
/// Contains the line reader, tokenizer, command table, bounded wait helper
/// and the shell loop.
pub mod system;
