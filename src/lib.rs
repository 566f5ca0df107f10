//! # libcmd - command-line plumbing for embedded shells
//!
//! Small building blocks shared by command shells that run on a device and take
//! input either from a serial port (UART) or from a network session (Telnet).
//! The crate is designed for embedded systems and supports `no_std`
//! environments.
//!
//! ## Features
//!
//! - **Tokenizer**: splits a line on a single delimiter character into a
//!   container of the caller's choosing, or lazily without any container
//! - **Command table**: a fixed, read-only map from command names (`NOOP`,
//!   `LS`, `DIR`, `EXIT`) to [`CommandKind`]
//! - **Client vocabulary**: [`ClientKind`] tags the transport a command came in on
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! libcmd = "0.1.0"
//! ```
//!
//! ### Splitting a line and resolving the command
//!
//! ```rust
//! use libcmd::{lookup, try_split, CommandKind};
//!
//! let line = "LS /data";
//! let words = try_split::<4>(line, ' ').unwrap();
//!
//! assert_eq!(words.as_slice(), &["LS", "/data"]);
//! assert_eq!(lookup(words[0]), Some(CommandKind::Ls));
//! ```
//!
//! ### Choosing the container
//!
//! ```rust
//! use std::collections::LinkedList;
//! use libcmd::split;
//!
//! let fields: Vec<&str> = split("a,,c", ',');
//! assert_eq!(fields, ["a", "", "c"]);
//!
//! let list: LinkedList<&str> = split("a,b,", ',');
//! assert_eq!(list.len(), 3);
//! ```
//!
//! ## Platform Support
//!
//! Everything except [`split_owned`](util::split::split_owned) works on bare
//! `core`. Token buffers can be bounded with `heapless` so no allocator is
//! needed.
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (implies `alloc`)
//! - `alloc`: Enable owned-token helpers backed by `alloc::vec::Vec`
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

#[cfg(feature = "alloc")]
extern crate alloc;

/// Tokenizer, command table and shared enumerations.
///
/// Everything in here is also re-exported from the crate root.
pub mod util;

pub use util::client::ClientKind;
pub use util::command::{COMMANDS, CommandKind, CommandTable, lookup};
pub use util::error::Error;
pub use util::split::{BoundedTokens, DEFAULT_MAX_TOKENS, Split, split, tokens, try_split};

#[cfg(feature = "alloc")]
pub use util::split::split_owned;
