//! Shell timing and parsing configuration.
//!
//! Firmware usually builds the shell with [`ShellConfig::default`]. Devices
//! that ship a configuration blob can load overrides from JSON; any field
//! left out keeps its default.
//!
//! ```rust
//! use netshell::system::config::ShellConfig;
//!
//! let config = ShellConfig::from_json(br#"{"connect_timeout_ms": 10000}"#).unwrap();
//! assert_eq!(config.connect_timeout_ms, 10_000);
//! assert_eq!(config.poll_interval_ms, 1_000);
//! ```

use super::args::MAX_ARGS;
use serde::Deserialize;

/// Default time allowed for connect, reconnect and disconnect to converge.
pub const DEFAULT_CONNECT_TIMEOUT_MS: u32 = 30_000;
/// Default interval between status polls while waiting on the network.
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 1_000;
/// Default interval between input checks at the entry gate.
pub const DEFAULT_GATE_POLL_INTERVAL_MS: u32 = 100;
/// Default watchdog timeout armed by `boot`.
pub const DEFAULT_WATCHDOG_TIMEOUT_MS: u32 = 15;

/// Errors from loading or validating a [`ShellConfig`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ConfigError {
    /// The JSON could not be parsed into a configuration.
    Parse,
    /// `max_args` is zero or larger than [`MAX_ARGS`].
    InvalidMaxArgs,
    /// A poll interval is zero.
    InvalidInterval,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ConfigError::Parse => defmt::write!(f, "Parse"),
            ConfigError::InvalidMaxArgs => defmt::write!(f, "InvalidMaxArgs"),
            ConfigError::InvalidInterval => defmt::write!(f, "InvalidInterval"),
        }
    }
}

/// Runtime settings for a [`Shell`](super::shell::Shell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// How long connect, reconnect and disconnect wait for the status to settle.
    pub connect_timeout_ms: u32,
    /// Delay between status polls, and between progress dots.
    pub poll_interval_ms: u32,
    /// Delay between input checks while waiting at the entry gate.
    pub gate_poll_interval_ms: u32,
    /// Watchdog timeout armed by the `boot` command.
    pub watchdog_timeout_ms: u32,
    /// Arguments kept per line, including the command name.
    pub max_args: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            gate_poll_interval_ms: DEFAULT_GATE_POLL_INTERVAL_MS,
            watchdog_timeout_ms: DEFAULT_WATCHDOG_TIMEOUT_MS,
            max_args: MAX_ARGS,
        }
    }
}

impl ShellConfig {
    /// Parse and validate a JSON configuration object.
    pub fn from_json(json: &[u8]) -> Result<Self, ConfigError> {
        let (config, _): (ShellConfig, _) =
            serde_json_core::from_slice(json).map_err(|_| ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_args == 0 || self.max_args > MAX_ARGS {
            return Err(ConfigError::InvalidMaxArgs);
        }
        if self.poll_interval_ms == 0 || self.gate_poll_interval_ms == 0 {
            return Err(ConfigError::InvalidInterval);
        }
        Ok(())
    }
}
