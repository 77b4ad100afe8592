//! System utilities for embedded devices.
//!
//! This module provides the interactive network shell and the pieces it is
//! built from. Everything here is `no_std` and allocation-free: lines, tokens
//! and credentials live in fixed-capacity `heapless` buffers.
//!
//! # Available Utilities
//!
//! - **[`shell`]**: The shell loop, entry gate and command handlers
//! - **[`line`]**: Line input with optional echo
//! - **[`args`]**: Bounded tokenizer
//! - **[`commands`]**: The static command table
//! - **[`wait`]**: Deadline-bounded polling
//! - **[`config`]**: Timing and parsing configuration
//!
//! # Usage
//!
//! ```rust,no_run
//! # use netshell::io::Transport;
//! # use netshell::network::Network;
//! # use netshell::system::Platform;
//! use netshell::system::shell::Shell;
//!
//! fn run<T: Transport, N: Network, P: Platform>(uart: T, wifi: N, board: P) {
//!     let mut shell = Shell::new(uart, wifi, board);
//!     // Give the operator five seconds to press a key before the
//!     // application starts.
//!     let _ = shell.auto_launch(5);
//! }
//! ```

use embedded_hal::delay::DelayNs;

/// Bounded tokenizer.
pub mod args;

/// The static command table.
pub mod commands;

/// Timing and parsing configuration.
pub mod config;

/// Line input with optional echo.
pub mod line;

/// The shell loop, entry gate and command handlers.
pub mod shell;

/// Deadline-bounded polling.
pub mod wait;


/// Clock, delay and watchdog services the shell needs from the board.
///
/// The delay half is [`embedded_hal::delay::DelayNs`], so any HAL delay
/// provider can be reused.
pub trait Platform: DelayNs {
    /// Milliseconds on a monotonic clock. The epoch is arbitrary.
    fn now_ms(&mut self) -> u64;

    /// Arm the hardware watchdog so that it resets the device after
    /// `timeout_ms` unless fed.
    fn arm_watchdog(&mut self, timeout_ms: u32);
}
