//! Common error types for network operations

/// A common error type for network operations.
///
/// Connection lifecycle calls on [`Network`](super::Network) do not fail
/// synchronously; their outcome is observed through
/// [`Network::status`](super::Network::status). Only operations that produce a
/// result directly report errors here.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum Error {
    /// The network scan could not be performed.
    ScanFailed,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::ScanFailed => f.write_str("Network discovery failed"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::ScanFailed => defmt::write!(f, "ScanFailed"),
        }
    }
}
