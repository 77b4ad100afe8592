//! Connectivity status and device mode.

use core::fmt;

/// Connectivity state as reported by the network stack.
///
/// The shell only ever reads this; the stack updates it asynchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Stack is idle, no association in progress.
    Idle,
    /// The configured SSID could not be found.
    SsidNotFound,
    /// A scan finished.
    ScanCompleted,
    /// Associated with an access point.
    Connected,
    /// Association failed.
    ConnectFailed,
    /// A previously established connection was lost.
    ConnectionLost,
    /// The access point rejected the passphrase.
    WrongPassword,
    /// Not associated.
    Disconnected,
}

impl Status {
    /// The name printed by the shell, e.g. `CONNECTED`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Idle => "IDLE",
            Status::SsidNotFound => "SSID_NOT_FOUND",
            Status::ScanCompleted => "SCAN_COMPLETED",
            Status::Connected => "CONNECTED",
            Status::ConnectFailed => "CONNECT_FAILED",
            Status::ConnectionLost => "CONNECTION_LOST",
            Status::WrongPassword => "WRONG_PASSWORD",
            Status::Disconnected => "DISCONNECTED",
        }
    }

    /// Returns `true` for [`Status::Connected`].
    pub const fn is_connected(self) -> bool {
        matches!(self, Status::Connected)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Status {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str())
    }
}

/// Radio operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Radio off.
    Off,
    /// Station (client) only.
    Station,
    /// Access point only.
    AccessPoint,
    /// Station and access point at the same time.
    StationAccessPoint,
}

impl Mode {
    /// Build a mode from the station and access-point enable flags.
    pub const fn from_flags(station: bool, access_point: bool) -> Self {
        match (station, access_point) {
            (false, false) => Mode::Off,
            (true, false) => Mode::Station,
            (false, true) => Mode::AccessPoint,
            (true, true) => Mode::StationAccessPoint,
        }
    }

    /// Parse a `set-mode` argument.
    ///
    /// `STA`, `AP` and `STA+AP` select the matching mode. Every other token,
    /// including `NULL`, leaves both interfaces disabled.
    ///
    /// ```rust
    /// use netshell::network::Mode;
    ///
    /// assert_eq!(Mode::from_token("STA+AP"), Mode::StationAccessPoint);
    /// assert_eq!(Mode::from_token("sta"), Mode::Off);
    /// ```
    pub fn from_token(token: &str) -> Self {
        let station = matches!(token, "STA" | "STA+AP");
        let access_point = matches!(token, "AP" | "STA+AP");
        Self::from_flags(station, access_point)
    }

    /// Whether the station interface is enabled.
    pub const fn station(self) -> bool {
        matches!(self, Mode::Station | Mode::StationAccessPoint)
    }

    /// Whether the access-point interface is enabled.
    pub const fn access_point(self) -> bool {
        matches!(self, Mode::AccessPoint | Mode::StationAccessPoint)
    }

    /// The token printed by the shell and accepted by `set-mode`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Off => "NULL",
            Mode::Station => "STA",
            Mode::AccessPoint => "AP",
            Mode::StationAccessPoint => "STA+AP",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Mode {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str())
    }
}
