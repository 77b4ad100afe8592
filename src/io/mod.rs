//! Byte transport abstraction for the shell's serial link.
//!
//! The shell never talks to a UART directly. It drives a [`Transport`], which
//! the firmware implements on top of whatever serial peripheral it owns, and
//! wraps it in a [`Console`] that adds line and formatted output.
//!
//! # Examples
//!
//! ```rust
//! use netshell::io::{Console, Transport};
//!
//! struct Loopback {
//!     pending: Option<u8>,
//! }
//!
//! impl Transport for Loopback {
//!     type Error = ();
//!
//!     fn byte_available(&mut self) -> bool {
//!         self.pending.is_some()
//!     }
//!
//!     fn read_byte(&mut self) -> Result<u8, Self::Error> {
//!         self.pending.take().ok_or(())
//!     }
//!
//!     fn write(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
//!         self.pending = buf.last().copied();
//!         Ok(())
//!     }
//! }
//!
//! let mut console = Console::new(Loopback { pending: None });
//! console.write_str("x").unwrap();
//! assert!(console.byte_available());
//! ```

use core::fmt;

/// ASCII line feed character (0x0A).
pub const ASCII_LF: u8 = 0x0A;
/// ASCII carriage return character (0x0D).
pub const ASCII_CR: u8 = 0x0D;
/// ASCII space character (0x20).
pub const ASCII_SPACE: u8 = 0x20;

/// Line ending written after every line of shell output.
pub const NEWLINE: &str = "\r\n";

/// A byte-at-a-time serial link.
///
/// There are no timing guarantees beyond "bytes arrive eventually":
/// [`read_byte`](Transport::read_byte) is expected to block until a byte is
/// available, and [`byte_available`](Transport::byte_available) is the only
/// non-blocking probe.
pub trait Transport {
    /// Associated error type
    type Error: core::fmt::Debug;

    /// Returns `true` if [`read_byte`](Transport::read_byte) would return
    /// without blocking.
    fn byte_available(&mut self) -> bool;

    /// Read a single byte, blocking until one arrives.
    fn read_byte(&mut self) -> Result<u8, Self::Error>;

    /// Write raw bytes to the link.
    fn write(&mut self, buf: &[u8]) -> Result<(), Self::Error>;
}

/// Output helpers layered over a [`Transport`].
///
/// `Console` implements an inherent `write_fmt`, so `write!` works directly
/// against it and propagates the transport's own error type rather than
/// [`core::fmt::Error`].
#[derive(Debug)]
pub struct Console<T> {
    transport: T,
}

impl<T: Transport> Console<T> {
    /// Wrap a transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Borrow the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the underlying transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Unwrap the console, returning the transport.
    pub fn into_inner(self) -> T {
        self.transport
    }

    /// See [`Transport::byte_available`].
    pub fn byte_available(&mut self) -> bool {
        self.transport.byte_available()
    }

    /// See [`Transport::read_byte`].
    pub fn read_byte(&mut self) -> Result<u8, T::Error> {
        self.transport.read_byte()
    }

    /// Write raw bytes.
    pub fn write_bytes(&mut self, buf: &[u8]) -> Result<(), T::Error> {
        self.transport.write(buf)
    }

    /// Write a string without a line ending.
    pub fn write_str(&mut self, text: &str) -> Result<(), T::Error> {
        self.transport.write(text.as_bytes())
    }

    /// Write a string followed by [`NEWLINE`].
    pub fn write_line(&mut self, text: &str) -> Result<(), T::Error> {
        self.write_str(text)?;
        self.newline()
    }

    /// Write an empty line.
    pub fn newline(&mut self) -> Result<(), T::Error> {
        self.write_str(NEWLINE)
    }

    /// Write formatted output. Used through the `write!` macro.
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), T::Error> {
        let mut adapter = Adapter {
            transport: &mut self.transport,
            error: None,
        };
        match fmt::write(&mut adapter, args) {
            Ok(()) => Ok(()),
            // A formatting failure that did not come from the link leaves
            // partial output behind and is otherwise ignored.
            Err(_) => adapter.error.take().map_or(Ok(()), Err),
        }
    }
}

struct Adapter<'a, T: Transport> {
    transport: &'a mut T,
    error: Option<T::Error>,
}

impl<T: Transport> fmt::Write for Adapter<'_, T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.transport.write(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}
