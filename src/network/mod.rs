//! Network capability consumed by the shell.
//!
//! The connection lifecycle itself (association, scanning, signal measurement,
//! persistence) belongs to the device's network stack. This module only
//! describes the surface the shell calls into, so any Wi-Fi driver can be
//! plugged in by implementing [`Network`].
//!
//! Every getter is a fresh read from the stack. Callers must not assume two
//! consecutive [`Network::status`] calls return the same value: association
//! and scanning complete asynchronously underneath.

#![deny(unsafe_code)]

/// Common error types for network operations
pub mod error;

mod config;
mod status;

use core::net::Ipv4Addr;

pub use config::{
    ConfigSlot, MacAddress, PASSPHRASE_MAX_LEN, Passphrase, SSID_MAX_LEN, Ssid, StationConfig,
    truncated,
};
pub use status::{Mode, Status};

/// Re-exports of common items
pub mod prelude {
    pub use super::error::Error as NetworkError;
    pub use super::{ConfigSlot, Mode, Network, Status};
}

/// Connectivity operations provided by the device's network stack.
///
/// State-changing calls only *begin* an operation and return immediately;
/// progress is observed by polling [`status`](Network::status).
pub trait Network {
    /// Bring the stack to its baseline running state.
    ///
    /// Called once when the shell starts. Must be idempotent.
    fn start(&mut self);

    /// Begin associating with `ssid`, using `passphrase` for secured networks.
    fn begin(&mut self, ssid: &str, passphrase: Option<&str>);

    /// Begin re-associating with the most recently configured network.
    fn begin_reassociate(&mut self);

    /// Begin leaving the current network.
    fn disassociate(&mut self);

    /// Current connectivity status.
    fn status(&mut self) -> Status;

    /// Scan for networks, returning how many were found.
    ///
    /// Results are then read by index with [`ssid_at`](Network::ssid_at) and
    /// [`rssi_at`](Network::rssi_at).
    fn scan(&mut self) -> Result<usize, error::Error>;

    /// SSID of the scan result at `index`.
    fn ssid_at(&mut self, index: usize) -> Ssid;

    /// Signal strength in dBm of the scan result at `index`.
    fn rssi_at(&mut self, index: usize) -> i32;

    /// SSID of the configured network, empty if none.
    fn ssid(&mut self) -> Ssid;

    /// Signal strength in dBm of the current connection.
    fn rssi(&mut self) -> i32;

    /// Station IPv4 address.
    fn local_ip(&mut self) -> Ipv4Addr;

    /// Station hardware address.
    fn mac_address(&mut self) -> MacAddress;

    /// Current radio mode.
    fn mode(&mut self) -> Mode;

    /// Apply a radio mode.
    fn set_mode(&mut self, mode: Mode);

    /// Whether the device associates automatically at startup.
    fn auto_connect(&mut self) -> bool;

    /// Set [`auto_connect`](Network::auto_connect).
    fn set_auto_connect(&mut self, enabled: bool);

    /// Whether the device re-associates automatically after losing the link.
    fn auto_reconnect(&mut self) -> bool;

    /// Set [`auto_reconnect`](Network::auto_reconnect).
    fn set_auto_reconnect(&mut self, enabled: bool);

    /// Whether configuration changes survive a power cycle.
    fn persistent(&mut self) -> bool;

    /// Set [`persistent`](Network::persistent).
    fn set_persistent(&mut self, enabled: bool);

    /// Stored credentials for `slot`.
    fn station_config(&mut self, slot: ConfigSlot) -> StationConfig;
}
