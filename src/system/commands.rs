//! The fixed command table.
//!
//! Commands are looked up by exact, case-sensitive name. The table order is
//! also the order in which `help` lists them.

/// Identifies a built-in command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandId {
    /// Print the command list.
    Help,
    /// Restart the device through the watchdog.
    Boot,
    /// Leave the shell.
    Exit,
    /// Print device and network details.
    Info,
    /// Print the connectivity status.
    Status,
    /// Associate with a network, prompting for credentials.
    Connect,
    /// Re-associate with the configured network.
    Reconnect,
    /// Leave the current network.
    Disconnect,
    /// Scan and list nearby networks.
    ListNetworks,
    /// Change the radio mode.
    SetMode,
    /// Change the auto-connect flag.
    SetAutoConnect,
    /// Change the auto-reconnect flag.
    SetAutoReconnect,
    /// Change the persistence flag.
    SetPersistence,
}

#[cfg(feature = "defmt")]
impl defmt::Format for CommandId {
    fn format(&self, f: defmt::Formatter) {
        match self {
            CommandId::Help => defmt::write!(f, "Help"),
            CommandId::Boot => defmt::write!(f, "Boot"),
            CommandId::Exit => defmt::write!(f, "Exit"),
            CommandId::Info => defmt::write!(f, "Info"),
            CommandId::Status => defmt::write!(f, "Status"),
            CommandId::Connect => defmt::write!(f, "Connect"),
            CommandId::Reconnect => defmt::write!(f, "Reconnect"),
            CommandId::Disconnect => defmt::write!(f, "Disconnect"),
            CommandId::ListNetworks => defmt::write!(f, "ListNetworks"),
            CommandId::SetMode => defmt::write!(f, "SetMode"),
            CommandId::SetAutoConnect => defmt::write!(f, "SetAutoConnect"),
            CommandId::SetAutoReconnect => defmt::write!(f, "SetAutoReconnect"),
            CommandId::SetPersistence => defmt::write!(f, "SetPersistence"),
        }
    }
}

/// A command table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    /// The command name as typed by the operator.
    pub name: &'static str,
    /// Argument synopsis shown in help, empty if the command takes none.
    pub usage: &'static str,
    /// One-line description shown in help.
    pub description: &'static str,
    /// Handler selector.
    pub id: CommandId,
}

/// Every command the shell understands.
pub const COMMANDS: &[Command] = &[
    Command {
        name: "help",
        usage: "",
        description: "list all commands",
        id: CommandId::Help,
    },
    Command {
        name: "boot",
        usage: "",
        description: "reboot the device using WDT",
        id: CommandId::Boot,
    },
    Command {
        name: "exit",
        usage: "",
        description: "exit CLI",
        id: CommandId::Exit,
    },
    Command {
        name: "info",
        usage: "",
        description: "display device and network info",
        id: CommandId::Info,
    },
    Command {
        name: "status",
        usage: "",
        description: "display current device status",
        id: CommandId::Status,
    },
    Command {
        name: "connect",
        usage: "",
        description: "connect to an access point",
        id: CommandId::Connect,
    },
    Command {
        name: "reconnect",
        usage: "",
        description: "connect to previous access point",
        id: CommandId::Reconnect,
    },
    Command {
        name: "disconnect",
        usage: "",
        description: "disconnect from current access point",
        id: CommandId::Disconnect,
    },
    Command {
        name: "list-networks",
        usage: "",
        description: "list available networks",
        id: CommandId::ListNetworks,
    },
    Command {
        name: "set-mode",
        usage: "[NULL|STA|AP|STA+AP]",
        description: "set device mode",
        id: CommandId::SetMode,
    },
    Command {
        name: "set-autoconnect",
        usage: "[true|false]",
        description: "device will reconnect on power on",
        id: CommandId::SetAutoConnect,
    },
    Command {
        name: "set-autoreconnect",
        usage: "[true|false]",
        description: "device will reconnect after connection loss",
        id: CommandId::SetAutoReconnect,
    },
    Command {
        name: "set-persistence",
        usage: "[true|false]",
        description: "settings will persist after power cycle",
        id: CommandId::SetPersistence,
    },
];

impl Command {
    /// Look up a command by name.
    ///
    /// ```rust
    /// use netshell::system::commands::{Command, CommandId};
    ///
    /// assert_eq!(Command::find("status").map(|c| c.id), Some(CommandId::Status));
    /// assert!(Command::find("STATUS").is_none());
    /// assert!(Command::find("").is_none());
    /// ```
    pub fn find(name: &str) -> Option<&'static Command> {
        COMMANDS.iter().find(|command| command.name == name)
    }
}

/// Parse a boolean setter argument. Only the exact string `"true"` is true.
pub fn parse_flag(token: &str) -> bool {
    token == "true"
}
