//! Scripted collaborators for driving the shell in tests.

#![allow(dead_code)]

use embedded_hal::delay::DelayNs;
use netshell::io::Transport;
use netshell::network::error::Error as NetworkError;
use netshell::network::{
    ConfigSlot, MacAddress, Mode, Network, Ssid, StationConfig, Status, truncated,
};
use netshell::system::Platform;
use netshell::system::shell::Shell;
use std::cell::Cell;
use std::collections::VecDeque;
use std::net::Ipv4Addr;
use std::rc::Rc;

/// Milliseconds of fake time shared between the platform and the transport.
pub type SharedClock = Rc<Cell<u64>>;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MockError {
    /// The scripted input ran out while the shell wanted another byte.
    Exhausted,
}

#[derive(Debug)]
pub struct MockTransport {
    input: VecDeque<u8>,
    output: Vec<u8>,
    arrival: Option<(SharedClock, u64)>,
}

impl MockTransport {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.bytes().collect(),
            output: Vec::new(),
            arrival: None,
        }
    }

    /// Input only becomes visible to `byte_available` once the shared clock
    /// reaches `at_ms`.
    pub fn arriving_at(input: &str, clock: SharedClock, at_ms: u64) -> Self {
        Self {
            arrival: Some((clock, at_ms)),
            ..Self::new(input)
        }
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    pub fn unread(&self) -> usize {
        self.input.len()
    }
}

impl Transport for MockTransport {
    type Error = MockError;

    fn byte_available(&mut self) -> bool {
        let arrived = match &self.arrival {
            Some((clock, at_ms)) => clock.get() >= *at_ms,
            None => true,
        };
        arrived && !self.input.is_empty()
    }

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        self.input.pop_front().ok_or(MockError::Exhausted)
    }

    fn write(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
        self.output.extend_from_slice(buf);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Start,
    Begin {
        ssid: String,
        passphrase: Option<String>,
    },
    Reassociate,
    Disassociate,
    Scan,
    SetMode(Mode),
    SetAutoConnect(bool),
    SetAutoReconnect(bool),
    SetPersistent(bool),
}

#[derive(Debug)]
pub struct MockNetwork {
    pub calls: Vec<Call>,
    /// Returned by successive `status` calls before falling back to `status`.
    pub status_script: VecDeque<Status>,
    pub status: Status,
    pub status_reads: usize,
    pub ssid: String,
    pub rssi: i32,
    pub ip: Ipv4Addr,
    pub mac: MacAddress,
    pub mode: Mode,
    pub auto_connect: bool,
    pub auto_reconnect: bool,
    pub persistent: bool,
    pub default_config: StationConfig,
    pub current_config: StationConfig,
    pub scan_result: Result<Vec<(String, i32)>, NetworkError>,
}

impl Default for MockNetwork {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            status_script: VecDeque::new(),
            status: Status::Idle,
            status_reads: 0,
            ssid: String::new(),
            rssi: 0,
            ip: Ipv4Addr::UNSPECIFIED,
            mac: MacAddress::default(),
            mode: Mode::Station,
            auto_connect: false,
            auto_reconnect: false,
            persistent: true,
            default_config: StationConfig::default(),
            current_config: StationConfig::default(),
            scan_result: Ok(Vec::new()),
        }
    }
}

impl MockNetwork {
    pub fn with_statuses(mut self, script: &[Status], then: Status) -> Self {
        self.status_script = script.iter().copied().collect();
        self.status = then;
        self
    }

    pub fn with_ssid(mut self, ssid: &str) -> Self {
        self.ssid = ssid.to_string();
        self
    }

    pub fn called(&self, call: &Call) -> bool {
        self.calls.contains(call)
    }
}

impl Network for MockNetwork {
    fn start(&mut self) {
        self.calls.push(Call::Start);
    }

    fn begin(&mut self, ssid: &str, passphrase: Option<&str>) {
        self.calls.push(Call::Begin {
            ssid: ssid.to_string(),
            passphrase: passphrase.map(str::to_string),
        });
    }

    fn begin_reassociate(&mut self) {
        self.calls.push(Call::Reassociate);
    }

    fn disassociate(&mut self) {
        self.calls.push(Call::Disassociate);
    }

    fn status(&mut self) -> Status {
        self.status_reads += 1;
        self.status_script.pop_front().unwrap_or(self.status)
    }

    fn scan(&mut self) -> Result<usize, NetworkError> {
        self.calls.push(Call::Scan);
        self.scan_result.as_ref().map(Vec::len).map_err(|e| *e)
    }

    fn ssid_at(&mut self, index: usize) -> Ssid {
        let found = self.scan_result.as_ref().ok().and_then(|list| list.get(index));
        truncated(found.map_or("", |(ssid, _)| ssid.as_str()))
    }

    fn rssi_at(&mut self, index: usize) -> i32 {
        let found = self.scan_result.as_ref().ok().and_then(|list| list.get(index));
        found.map_or(0, |(_, rssi)| *rssi)
    }

    fn ssid(&mut self) -> Ssid {
        truncated(&self.ssid)
    }

    fn rssi(&mut self) -> i32 {
        self.rssi
    }

    fn local_ip(&mut self) -> Ipv4Addr {
        self.ip
    }

    fn mac_address(&mut self) -> MacAddress {
        self.mac
    }

    fn mode(&mut self) -> Mode {
        self.mode
    }

    fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.calls.push(Call::SetMode(mode));
    }

    fn auto_connect(&mut self) -> bool {
        self.auto_connect
    }

    fn set_auto_connect(&mut self, enabled: bool) {
        self.auto_connect = enabled;
        self.calls.push(Call::SetAutoConnect(enabled));
    }

    fn auto_reconnect(&mut self) -> bool {
        self.auto_reconnect
    }

    fn set_auto_reconnect(&mut self, enabled: bool) {
        self.auto_reconnect = enabled;
        self.calls.push(Call::SetAutoReconnect(enabled));
    }

    fn persistent(&mut self) -> bool {
        self.persistent
    }

    fn set_persistent(&mut self, enabled: bool) {
        self.persistent = enabled;
        self.calls.push(Call::SetPersistent(enabled));
    }

    fn station_config(&mut self, slot: ConfigSlot) -> StationConfig {
        match slot {
            ConfigSlot::Default => self.default_config.clone(),
            ConfigSlot::Current => self.current_config.clone(),
        }
    }
}

/// Platform whose delays advance a shared fake clock instead of sleeping.
#[derive(Debug)]
pub struct FakePlatform {
    clock: SharedClock,
    elapsed_ns: u64,
    pub delays: usize,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::with_clock(Rc::new(Cell::new(0)))
    }

    pub fn with_clock(clock: SharedClock) -> Self {
        Self {
            clock,
            elapsed_ns: 0,
            delays: 0,
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.clock.get()
    }
}

impl DelayNs for FakePlatform {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
        self.delays += 1;
        self.clock.set(self.elapsed_ns / 1_000_000);
    }
}

impl Platform for FakePlatform {
    fn now_ms(&mut self) -> u64 {
        self.clock.get()
    }

    fn arm_watchdog(&mut self, timeout_ms: u32) {
        panic!("watchdog armed: {timeout_ms}");
    }
}

pub type TestShell = Shell<MockTransport, MockNetwork, FakePlatform>;

pub fn shell(input: &str, network: MockNetwork) -> TestShell {
    Shell::new(MockTransport::new(input), network, FakePlatform::new())
}

pub fn output(shell: &TestShell) -> String {
    shell.transport().output()
}
