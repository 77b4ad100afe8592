use criterion::{BatchSize, Criterion, Throughput};
use embedded_hal::delay::DelayNs;
use netshell::io::{Console, Transport};
use netshell::network::error::Error as NetworkError;
use netshell::network::{ConfigSlot, MacAddress, Mode, Network, Ssid, StationConfig, Status};
use netshell::system::Platform;
use netshell::system::args::{Args, MAX_ARGS};
use netshell::system::line::{LineReader, MAX_LINE_LEN};
use netshell::system::shell::Shell;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::hint::black_box;
use std::net::Ipv4Addr;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz-+ ";

/// Input bytes are consumed from memory; output is discarded.
struct MemoryTransport {
    input: VecDeque<u8>,
}

impl Transport for MemoryTransport {
    type Error = ();

    fn byte_available(&mut self) -> bool {
        !self.input.is_empty()
    }

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        self.input.pop_front().ok_or(())
    }

    fn write(&mut self, _buf: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A network that is always connected and never changes.
struct IdleNetwork;

impl Network for IdleNetwork {
    fn start(&mut self) {}
    fn begin(&mut self, _ssid: &str, _passphrase: Option<&str>) {}
    fn begin_reassociate(&mut self) {}
    fn disassociate(&mut self) {}
    fn status(&mut self) -> Status {
        Status::Connected
    }
    fn scan(&mut self) -> Result<usize, NetworkError> {
        Ok(0)
    }
    fn ssid_at(&mut self, _index: usize) -> Ssid {
        Ssid::new()
    }
    fn rssi_at(&mut self, _index: usize) -> i32 {
        0
    }
    fn ssid(&mut self) -> Ssid {
        netshell::network::truncated("bench")
    }
    fn rssi(&mut self) -> i32 {
        -50
    }
    fn local_ip(&mut self) -> Ipv4Addr {
        Ipv4Addr::new(10, 0, 0, 2)
    }
    fn mac_address(&mut self) -> MacAddress {
        MacAddress([0x02, 0, 0, 0, 0, 1])
    }
    fn mode(&mut self) -> Mode {
        Mode::Station
    }
    fn set_mode(&mut self, _mode: Mode) {}
    fn auto_connect(&mut self) -> bool {
        true
    }
    fn set_auto_connect(&mut self, _enabled: bool) {}
    fn auto_reconnect(&mut self) -> bool {
        true
    }
    fn set_auto_reconnect(&mut self, _enabled: bool) {}
    fn persistent(&mut self) -> bool {
        false
    }
    fn set_persistent(&mut self, _enabled: bool) {}
    fn station_config(&mut self, _slot: ConfigSlot) -> StationConfig {
        StationConfig::new("bench", "secret")
    }
}

struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

impl Platform for NoDelay {
    fn now_ms(&mut self) -> u64 {
        0
    }

    fn arm_watchdog(&mut self, _timeout_ms: u32) {}
}

fn random_lines(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(1..=MAX_LINE_LEN);
            (0..len)
                .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
                .collect()
        })
        .collect()
}

pub fn bench_tokenize(c: &mut Criterion) {
    let lines = random_lines(256);
    let bytes: usize = lines.iter().map(String::len).sum();

    let mut group = c.benchmark_group("tokenize");
    group.throughput(Throughput::Bytes(bytes as u64));
    group.bench_function("random_lines", |b| {
        b.iter(|| {
            for line in &lines {
                black_box(Args::parse(black_box(line), MAX_ARGS));
            }
        })
    });
    group.finish();
}

pub fn bench_read_line(c: &mut Criterion) {
    let lines = random_lines(256);
    let input: Vec<u8> = lines
        .iter()
        .flat_map(|line| line.bytes().chain(*b"\r\n"))
        .collect();

    let mut group = c.benchmark_group("read_line");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("crlf_echo", |b| {
        b.iter_batched_ref(
            || {
                let transport = MemoryTransport {
                    input: input.iter().copied().collect(),
                };
                (Console::new(transport), LineReader::new())
            },
            |(console, reader)| {
                while console.byte_available() {
                    black_box(reader.read_line(console, "~$ ", true).ok());
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

pub fn bench_execute(c: &mut Criterion) {
    let mut group = c.benchmark_group("execute");
    for line in ["status", "info", "help", "set-mode STA+AP", "nope"] {
        group.bench_function(line, |b| {
            let transport = MemoryTransport {
                input: VecDeque::new(),
            };
            let mut shell = Shell::new(transport, IdleNetwork, NoDelay);
            b.iter(|| black_box(shell.execute(black_box(line)).ok()))
        });
    }
    group.finish();
}
