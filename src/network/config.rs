//! Station credentials and link-layer addressing.

use core::fmt;
use heapless::String;

/// Maximum SSID length in bytes.
pub const SSID_MAX_LEN: usize = 32;

/// Maximum passphrase length in bytes.
pub const PASSPHRASE_MAX_LEN: usize = 64;

/// A network name.
pub type Ssid = String<SSID_MAX_LEN>;

/// A WPA passphrase.
pub type Passphrase = String<PASSPHRASE_MAX_LEN>;

/// Which stored station configuration to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSlot {
    /// The configuration persisted across restarts.
    Default,
    /// The configuration currently in use.
    Current,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigSlot {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ConfigSlot::Default => defmt::write!(f, "Default"),
            ConfigSlot::Current => defmt::write!(f, "Current"),
        }
    }
}

/// Credentials held by the network stack for one [`ConfigSlot`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationConfig {
    /// Network name.
    pub ssid: Ssid,
    /// Passphrase, empty for open networks.
    pub passphrase: Passphrase,
}

impl StationConfig {
    /// Build a configuration, truncating each field to its capacity.
    pub fn new(ssid: &str, passphrase: &str) -> Self {
        Self {
            ssid: truncated(ssid),
            passphrase: truncated(passphrase),
        }
    }
}

/// Copy as much of `text` as fits into a fixed-capacity string.
pub fn truncated<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

/// A 48-bit hardware address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MacAddress(pub [u8; 6]);

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02X}:{b:02X}:{c:02X}:{d:02X}:{e:02X}:{g:02X}")
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MacAddress {
    fn format(&self, f: defmt::Formatter) {
        let [a, b, c, d, e, g] = self.0;
        defmt::write!(
            f,
            "{=u8:02X}:{=u8:02X}:{=u8:02X}:{=u8:02X}:{=u8:02X}:{=u8:02X}",
            a,
            b,
            c,
            d,
            e,
            g
        )
    }
}
