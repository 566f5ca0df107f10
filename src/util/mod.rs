//! Utilities shared by embedded command shells.
//!
//! This module holds the small pieces a shell front-end needs before it can
//! dispatch anything: breaking an input line into tokens, recognizing the
//! command word, and tagging which transport the line arrived on.
//!
//! # Available Utilities
//!
//! - **[`split`]**: Single-delimiter tokenizer with caller-chosen containers
//! - **[`command`]**: [`CommandKind`](command::CommandKind) and the static command table
//! - **[`client`]**: [`ClientKind`](client::ClientKind) transport tags
//! - **[`error`]**: Error type for the fallible helpers
//!
//! # Design Principles
//!
//! - **Embedded-First**: No allocation in the core, `heapless` for bounded buffers
//! - **Total**: Splitting and lookup always produce a result, absence is `None`
//! - **Read-Only Tables**: The command table is `const` data shared without locking
//!
//! # Usage
//!
//! ```rust
//! use libcmd::util::client::ClientKind;
//! use libcmd::util::command::{lookup, CommandKind};
//! use libcmd::util::split::tokens;
//!
//! fn handle(line: &str, _from: ClientKind) -> Option<CommandKind> {
//!     let mut words = tokens(line, ' ');
//!     words.next().and_then(lookup)
//! }
//!
//! assert_eq!(handle("EXIT", ClientKind::Telnet), Some(CommandKind::Exit));
//! assert_eq!(handle("reboot now", ClientKind::Uart), None);
//! ```

/// Client transport tags.
pub mod client;

/// Command identifiers and the static command table.
pub mod command;

/// Error type for the fallible helpers.
pub mod error;

/// Single-delimiter tokenizer.
///
/// Splits text on every occurrence of a delimiter character, keeping empty
/// tokens, and hands the tokens to whatever container the caller asks for.
pub mod split;

#[cfg(test)]
mod tests;
