//! Command identifiers and the static command table.
//!
//! The table maps the command words a shell recognizes to a [`CommandKind`].
//! It is `const` data: built at compile time, never mutated, and safe to read
//! from any number of threads or interrupt contexts without locking.
//!
//! # Lookup
//!
//! Names are matched exactly, so `"LS"` resolves but `"ls"` does not. A miss
//! is reported as `None` and the caller decides what an unknown command means.
//!
//! ```rust
//! use libcmd::{lookup, CommandKind, COMMANDS};
//!
//! assert_eq!(lookup("LS"), Some(CommandKind::Ls));
//! assert_eq!(lookup("ls"), None);
//! assert_eq!(lookup("FOO"), None);
//!
//! assert_eq!(COMMANDS.len(), 4);
//! ```

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::Error;

/// Identifier of a recognized command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum CommandKind {
    /// Do nothing.
    Noop = 0,
    /// List directory contents.
    Ls = 1,
    /// List directory contents (DOS spelling).
    Dir = 2,
    /// End the session.
    Exit = 3,
}

impl CommandKind {
    /// Every command kind, in identifier order.
    pub const ALL: [CommandKind; 4] = [
        CommandKind::Noop,
        CommandKind::Ls,
        CommandKind::Dir,
        CommandKind::Exit,
    ];

    /// Canonical command word, as stored in the command table.
    pub const fn name(self) -> &'static str {
        match self {
            CommandKind::Noop => "NOOP",
            CommandKind::Ls => "LS",
            CommandKind::Dir => "DIR",
            CommandKind::Exit => "EXIT",
        }
    }

    /// Resolve a command word through [`COMMANDS`].
    pub fn from_name(name: &str) -> Option<Self> {
        COMMANDS.get(name)
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CommandKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or(Error::UnknownCommand)
    }
}

impl TryFrom<u8> for CommandKind {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(Error::UnknownCommand)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CommandKind {
    fn format(&self, f: defmt::Formatter) {
        match self {
            CommandKind::Noop => defmt::write!(f, "NOOP"),
            CommandKind::Ls => defmt::write!(f, "LS"),
            CommandKind::Dir => defmt::write!(f, "DIR"),
            CommandKind::Exit => defmt::write!(f, "EXIT"),
        }
    }
}

/// Read-only map from command word to [`CommandKind`].
///
/// The only instance is [`COMMANDS`]. Entries are kept in identifier order
/// and the table is small enough that a linear scan beats hashing.
#[derive(Debug)]
pub struct CommandTable {
    entries: &'static [(&'static str, CommandKind)],
}

/// Process-wide command table.
pub static COMMANDS: CommandTable = CommandTable::new(&[
    ("NOOP", CommandKind::Noop),
    ("LS", CommandKind::Ls),
    ("DIR", CommandKind::Dir),
    ("EXIT", CommandKind::Exit),
]);

impl CommandTable {
    const fn new(entries: &'static [(&'static str, CommandKind)]) -> Self {
        Self { entries }
    }

    /// Look up a command word.
    ///
    /// # Returns
    ///
    /// * `Some(kind)` - The word is in the table
    /// * `None` - Unknown word, including case mismatches
    pub fn get(&self, name: &str) -> Option<CommandKind> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|&(_, kind)| kind)
    }

    /// Whether `name` is a known command word.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Command word registered for `kind`.
    pub fn name_of(&self, kind: CommandKind) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|&&(_, entry)| entry == kind)
            .map(|&(name, _)| name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(word, kind)` pairs in identifier order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'static str, CommandKind)> + '_ {
        self.entries.iter().copied()
    }
}

impl<'t> IntoIterator for &'t CommandTable {
    type Item = (&'static str, CommandKind);
    type IntoIter = core::iter::Copied<core::slice::Iter<'static, (&'static str, CommandKind)>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().copied()
    }
}

/// Look up a command word in [`COMMANDS`].
///
/// # Examples
///
/// ```rust
/// use libcmd::{lookup, CommandKind};
///
/// match lookup("DIR") {
///     Some(CommandKind::Ls | CommandKind::Dir) => { /* list files */ }
///     Some(_) => {}
///     None => { /* report unknown command */ }
/// }
/// ```
pub fn lookup(name: &str) -> Option<CommandKind> {
    COMMANDS.get(name)
}
