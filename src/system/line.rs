//! Line input over a byte transport.

use crate::io::{ASCII_CR, ASCII_LF, Console, NEWLINE, Transport};
use heapless::Vec;

/// Capacity of the line buffer, including the slot reserved for the terminator.
pub const LINE_CAPACITY: usize = 64;

/// Maximum number of data bytes in one line.
///
/// A line that reaches this length is complete even if no terminator has
/// arrived yet. Whatever the operator types after that, up to and including
/// the next terminator, is discarded.
pub const MAX_LINE_LEN: usize = LINE_CAPACITY - 1;

/// One line of operator input. Holds ASCII only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    bytes: Vec<u8, MAX_LINE_LEN>,
}

impl LineBuffer {
    /// An empty line.
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Append a byte. Non-ASCII bytes and bytes past the capacity are dropped.
    ///
    /// Returns `false` if the byte was not stored.
    pub fn push(&mut self, byte: u8) -> bool {
        byte.is_ascii() && self.bytes.push(byte).is_ok()
    }

    /// Number of stored bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if no bytes are stored.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns `true` once [`MAX_LINE_LEN`] bytes are stored.
    pub fn is_full(&self) -> bool {
        self.bytes.is_full()
    }

    /// The line as text.
    pub fn as_str(&self) -> &str {
        // Only ASCII is ever pushed, so this cannot fail.
        core::str::from_utf8(&self.bytes).unwrap_or_default()
    }
}

impl From<&str> for LineBuffer {
    fn from(text: &str) -> Self {
        let mut line = LineBuffer::new();
        for &byte in text.as_bytes() {
            if line.is_full() {
                break;
            }
            line.push(byte);
        }
        line
    }
}

/// Reads terminated lines from a transport.
///
/// CR and LF both end a line. When a line ends on CR, an LF arriving as the
/// very next byte is discarded so CRLF terminals do not produce a phantom
/// empty line.
///
/// A line that fills up before its terminator is returned at once. The rest
/// of it is dropped, without echo, at the start of the next read.
#[derive(Debug, Default)]
pub struct LineReader {
    swallow_lf: bool,
    overflow: bool,
}

impl LineReader {
    /// Create a reader with no pending terminator state.
    pub const fn new() -> Self {
        Self {
            swallow_lf: false,
            overflow: false,
        }
    }

    /// Account for a byte consumed from the transport outside of
    /// [`read_line`](LineReader::read_line).
    ///
    /// If `byte` is a CR, an LF that follows it is treated as part of the
    /// same terminator.
    pub fn after_terminator(&mut self, byte: u8) {
        self.swallow_lf = byte == ASCII_CR;
    }

    /// Returns `true` while the tail of an overlong line is still to be
    /// discarded.
    pub fn is_discarding(&self) -> bool {
        self.overflow
    }

    /// Print `prompt` and block until a complete line has been read.
    ///
    /// Received bytes are echoed when `echo` is set. The end of the line is
    /// always echoed as a newline so the terminal advances even for hidden
    /// input such as passphrases.
    pub fn read_line<T: Transport>(
        &mut self,
        console: &mut Console<T>,
        prompt: &str,
        echo: bool,
    ) -> Result<LineBuffer, T::Error> {
        console.write_str(prompt)?;

        let mut line = LineBuffer::new();
        loop {
            let byte = console.read_byte()?;
            let after_cr = core::mem::take(&mut self.swallow_lf);

            match byte {
                ASCII_LF if after_cr => continue,
                ASCII_CR | ASCII_LF => {
                    self.swallow_lf = byte == ASCII_CR;
                    if core::mem::take(&mut self.overflow) {
                        continue;
                    }
                    break;
                }
                _ if self.overflow => {
                    trace!("discarding overflow byte");
                }
                _ => {
                    if echo {
                        console.write_bytes(&[byte])?;
                    }
                    if !line.push(byte) {
                        trace!("dropped non-ascii input byte {=u8:#x}", byte);
                    }
                    if line.is_full() {
                        debug!("line reached capacity, terminating");
                        self.overflow = true;
                        break;
                    }
                }
            }
        }

        console.write_str(NEWLINE)?;
        Ok(line)
    }
}
