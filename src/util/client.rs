//! Client transport tags

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::Error;

/// Transport a command line arrived on.
///
/// Shells that listen on both a serial port and a network socket use this to
/// route responses back to the right place. The enum carries no behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum ClientKind {
    /// Serial console (UART).
    Uart = 0,
    /// Network session (Telnet).
    Telnet = 1,
}

impl ClientKind {
    /// Every client kind, in declaration order.
    pub const ALL: [ClientKind; 2] = [ClientKind::Uart, ClientKind::Telnet];

    /// Canonical upper-case name.
    pub const fn name(self) -> &'static str {
        match self {
            ClientKind::Uart => "UART",
            ClientKind::Telnet => "TELNET",
        }
    }

    /// Parse a canonical name. Matching is case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for ClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ClientKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or(Error::UnknownClient)
    }
}

impl TryFrom<u8> for ClientKind {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ClientKind::Uart),
            1 => Ok(ClientKind::Telnet),
            _ => Err(Error::UnknownClient),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ClientKind {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ClientKind::Uart => defmt::write!(f, "UART"),
            ClientKind::Telnet => defmt::write!(f, "TELNET"),
        }
    }
}
