//! Interactive network shell for embedded systems.
//!
//! The shell reads one line at a time from a serial [`Transport`], splits it
//! into arguments and runs one command from the fixed [`COMMANDS`] table
//! against a [`Network`] implementation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   LineReader    │───▶│      Args       │───▶│    dispatch     │
//! │  (byte-by-byte, │    │  (bounded       │    │  (static table, │
//! │   echo)         │    │   tokenizer)    │    │   handlers)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!          │                                             │
//!          ▼                                             ▼
//! ┌─────────────────┐                           ┌─────────────────┐
//! │    Transport    │                           │     Network     │
//! │   (serial link) │◀──── progress, status ────│   + Platform    │
//! └─────────────────┘                           └─────────────────┘
//! ```
//!
//! The line buffer and argument vector are locals of one loop iteration and
//! are passed explicitly to the tokenizer and the dispatcher; nothing about a
//! command line survives into the next one.
//!
//! # Blocking
//!
//! Everything runs to completion on the caller's context. Waiting for a line
//! blocks until the operator types. `connect`, `reconnect` and `disconnect`
//! poll the network status until it settles or
//! [`ShellConfig::connect_timeout_ms`] passes. `boot` never returns.
//!
//! # Session
//!
//! ```text
//! ~$ set-mode STA
//!
//! ~$ connect
//! name: office
//! passphrase:
//! ...
//! status: CONNECTED
//!
//! ~$ frobnicate
//! Unknown Command: frobnicate
//!
//! ~$ exit
//! ```

use super::Platform;
use super::args::Args;
use super::commands::{COMMANDS, Command, CommandId, parse_flag};
use super::config::ShellConfig;
use super::line::LineReader;
use super::wait::{self, WaitOutcome};
use crate::io::{Console, NEWLINE, Transport};
use crate::network::{ConfigSlot, Mode, Network, Passphrase, Ssid, Status, truncated};

/// Prompt printed before every command line.
pub const PROMPT: &str = "~$ ";

/// Printed for every tick of a bounded wait that has not finished yet.
pub const PROGRESS_MARKER: &str = ".";

/// What the shell loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Print the next prompt.
    Continue,
    /// Leave the shell loop.
    Exit,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Flow {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Flow::Continue => defmt::write!(f, "Continue"),
            Flow::Exit => defmt::write!(f, "Exit"),
        }
    }
}

/// The interactive shell.
///
/// Owns the serial console, the network capability and the platform services
/// for as long as it runs. Transport errors are the only failures that leave
/// the shell; everything else is reported to the operator and the loop goes
/// on.
#[derive(Debug)]
pub struct Shell<T, N, P> {
    console: Console<T>,
    network: N,
    platform: P,
    config: ShellConfig,
    reader: LineReader,
}

impl<T, N, P> Shell<T, N, P>
where
    T: Transport,
    N: Network,
    P: Platform,
{
    /// Create a shell with [`ShellConfig::default`].
    pub fn new(transport: T, network: N, platform: P) -> Self {
        Self::with_config(transport, network, platform, ShellConfig::default())
    }

    /// Create a shell with explicit settings.
    pub fn with_config(transport: T, network: N, platform: P, config: ShellConfig) -> Self {
        Self {
            console: Console::new(transport),
            network,
            platform,
            config,
            reader: LineReader::new(),
        }
    }

    /// Active settings.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Borrow the transport.
    pub fn transport(&self) -> &T {
        self.console.transport()
    }

    /// Mutably borrow the transport.
    pub fn transport_mut(&mut self) -> &mut T {
        self.console.transport_mut()
    }

    /// Borrow the network capability.
    pub fn network(&self) -> &N {
        &self.network
    }

    /// Mutably borrow the network capability.
    pub fn network_mut(&mut self) -> &mut N {
        &mut self.network
    }

    /// Borrow the platform.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Tear the shell down, handing back its collaborators.
    pub fn into_parts(self) -> (T, N, P) {
        (self.console.into_inner(), self.network, self.platform)
    }

    /// Offer the operator a chance to enter the shell before the application
    /// starts.
    ///
    /// Prints a "press any key" prompt and waits up to `timeout_seconds`,
    /// printing a dot per check. If a byte arrives in time it is consumed and
    /// [`begin`](Shell::begin) runs until `exit`. Returns whether the shell was
    /// entered.
    pub fn auto_launch(&mut self, timeout_seconds: u32) -> Result<bool, T::Error> {
        self.console.newline()?;
        self.console.write_line("press any key to launch CLI")?;

        let timeout_ms = timeout_seconds.saturating_mul(1_000);
        let console = &mut self.console;
        let outcome = wait::poll_until(
            &mut self.platform,
            timeout_ms,
            self.config.gate_poll_interval_ms,
            || -> Result<bool, T::Error> {
                if console.byte_available() {
                    return Ok(true);
                }
                console.write_str(PROGRESS_MARKER)?;
                Ok(false)
            },
        )?;

        let launched = outcome == WaitOutcome::Reached;
        debug!("entry gate: {}", outcome);
        if launched {
            let key = self.console.read_byte()?;
            self.reader.after_terminator(key);
            self.console.newline()?;
            self.begin()?;
        }

        self.console.newline()?;
        self.console.write_line("starting main application")?;
        Ok(launched)
    }

    /// Run the shell loop until the operator enters `exit`.
    pub fn begin(&mut self) -> Result<(), T::Error> {
        self.network.start();

        self.console.newline()?;
        self.console.write_line("Launching CLI")?;
        self.console.newline()?;
        self.help()?;

        loop {
            let line = self.reader.read_line(&mut self.console, PROMPT, true)?;
            let args = Args::parse(line.as_str(), self.config.max_args);
            if self.dispatch(&args)? == Flow::Exit {
                return Ok(());
            }
            self.console.newline()?;
        }
    }

    /// Tokenize `line` and run it as a command.
    pub fn execute(&mut self, line: &str) -> Result<Flow, T::Error> {
        let args = Args::parse(line, self.config.max_args);
        self.dispatch(&args)
    }

    /// Run the command named by `args[0]`.
    ///
    /// Unknown names print `Unknown Command: <name>` and continue.
    pub fn dispatch(&mut self, args: &Args) -> Result<Flow, T::Error> {
        let Some(command) = Command::find(args.command()) else {
            debug!("unknown command {=str}", args.command());
            write!(self.console, "Unknown Command: {}{}", args.command(), NEWLINE)?;
            return Ok(Flow::Continue);
        };

        debug!("dispatch {=str}", command.name);
        match command.id {
            CommandId::Help => self.help()?,
            CommandId::Boot => self.reboot(),
            CommandId::Exit => return Ok(Flow::Exit),
            CommandId::Info => self.info()?,
            CommandId::Status => self.print_status()?,
            CommandId::Connect => self.connect()?,
            CommandId::Reconnect => self.reconnect()?,
            CommandId::Disconnect => self.disconnect()?,
            CommandId::ListNetworks => self.list_networks()?,
            CommandId::SetMode => self.network.set_mode(Mode::from_token(args.arg(1))),
            CommandId::SetAutoConnect => self.network.set_auto_connect(parse_flag(args.arg(1))),
            CommandId::SetAutoReconnect => {
                self.network.set_auto_reconnect(parse_flag(args.arg(1)))
            }
            CommandId::SetPersistence => self.network.set_persistent(parse_flag(args.arg(1))),
        }
        Ok(Flow::Continue)
    }

    fn help(&mut self) -> Result<(), T::Error> {
        self.console.write_line("--- COMMANDS ---")?;
        for command in COMMANDS {
            if command.usage.is_empty() {
                write!(self.console, "{}: {}{}", command.name, command.description, NEWLINE)?;
            } else {
                write!(
                    self.console,
                    "{} {}: {}{}",
                    command.name, command.usage, command.description, NEWLINE
                )?;
            }
        }
        self.console.newline()
    }

    fn info(&mut self) -> Result<(), T::Error> {
        self.console.write_line("--- device info ---")?;
        let mode = self.network.mode();
        write!(self.console, "mode: {}{}", mode, NEWLINE)?;
        self.print_status()?;
        let auto_connect = self.network.auto_connect();
        self.print_flag("auto-connect", auto_connect)?;
        let auto_reconnect = self.network.auto_reconnect();
        self.print_flag("auto-reconnect", auto_reconnect)?;
        let persistent = self.network.persistent();
        self.print_flag("persistence", persistent)?;

        self.console.newline()?;
        self.console.write_line("--- network info ---")?;
        let ssid = self.network.ssid();
        write!(self.console, "name: {}{}", ssid, NEWLINE)?;
        let rssi = self.network.rssi();
        write!(self.console, "signal strength: {}{}", rssi, NEWLINE)?;
        let ip = self.network.local_ip();
        write!(self.console, "ip address: {}{}", ip, NEWLINE)?;
        let mac = self.network.mac_address();
        write!(self.console, "mac address: {}{}", mac, NEWLINE)?;

        self.console.newline()?;
        self.console.write_line("--- default network config ---")?;
        self.print_config(ConfigSlot::Default)?;

        // Without persistence the active credentials can differ from the
        // stored ones.
        if !self.network.persistent() {
            self.console.newline()?;
            self.console.write_line("--- current network config ---")?;
            self.print_config(ConfigSlot::Current)?;
        }
        Ok(())
    }

    fn connect(&mut self) -> Result<(), T::Error> {
        let name = self.reader.read_line(&mut self.console, "name: ", true)?;
        let ssid: Ssid = truncated(name.as_str());
        let secret = self.reader.read_line(&mut self.console, "passphrase: ", false)?;
        let passphrase: Passphrase = truncated(secret.as_str());

        if passphrase.is_empty() {
            self.network.begin(ssid.as_str(), None);
        } else {
            self.network.begin(ssid.as_str(), Some(passphrase.as_str()));
        }

        self.await_status(|status| status != Status::Disconnected)
    }

    fn reconnect(&mut self) -> Result<(), T::Error> {
        let ssid = self.network.ssid();
        if ssid.is_empty() {
            return self.console.write_line("network not configured");
        }

        write!(self.console, "connecting to {}{}", ssid, NEWLINE)?;
        self.network.begin_reassociate();
        self.await_status(Status::is_connected)
    }

    fn disconnect(&mut self) -> Result<(), T::Error> {
        let ssid = self.network.ssid();
        write!(self.console, "disconnecting from {}{}", ssid, NEWLINE)?;
        self.network.disassociate();
        self.await_status(|status| !status.is_connected())
    }

    fn list_networks(&mut self) -> Result<(), T::Error> {
        let count = match self.network.scan() {
            Ok(count) => count,
            Err(err) => {
                warn!("scan failed: {}", err);
                return write!(self.console, "{}{}", err, NEWLINE);
            }
        };

        for index in 0..count {
            let ssid = self.network.ssid_at(index);
            let rssi = self.network.rssi_at(index);
            write!(self.console, "{} ({}){}", ssid, rssi, NEWLINE)?;
        }
        Ok(())
    }

    /// Poll the status until `target` holds or the connect timeout passes,
    /// then print the status either way.
    fn await_status(&mut self, target: impl Fn(Status) -> bool) -> Result<(), T::Error> {
        let Self {
            console,
            network,
            platform,
            config,
            ..
        } = self;

        let outcome = wait::poll_until(
            platform,
            config.connect_timeout_ms,
            config.poll_interval_ms,
            || -> Result<bool, T::Error> {
                if target(network.status()) {
                    return Ok(true);
                }
                console.write_str(PROGRESS_MARKER)?;
                Ok(false)
            },
        )?;

        debug!("network wait: {}", outcome);
        self.console.newline()?;
        if outcome == WaitOutcome::TimedOut {
            self.console.write_str("Timeout: ")?;
        }
        self.print_status()
    }

    fn reboot(&mut self) -> ! {
        warn!("arming watchdog, {=u32} ms", self.config.watchdog_timeout_ms);
        self.platform.arm_watchdog(self.config.watchdog_timeout_ms);
        loop {
            core::hint::spin_loop();
        }
    }

    fn print_status(&mut self) -> Result<(), T::Error> {
        let status = self.network.status();
        write!(self.console, "status: {}{}", status, NEWLINE)
    }

    fn print_flag(&mut self, label: &str, value: bool) -> Result<(), T::Error> {
        write!(self.console, "{}: {}{}", label, value, NEWLINE)
    }

    fn print_config(&mut self, slot: ConfigSlot) -> Result<(), T::Error> {
        let config = self.network.station_config(slot);
        write!(self.console, "ssid: {}{}", config.ssid, NEWLINE)?;
        write!(self.console, "passphrase: {}{}", config.passphrase, NEWLINE)
    }
}
