//! Common error type for the fallible helpers

use core::fmt;

/// A common error type for tokenizer and command-name conversions.
///
/// Splitting and table lookup never fail on their own. This enum only covers
/// the bounded and parsing helpers built on top of them. It is designed to be
/// simple and portable for `no_std` environments.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// A fixed-capacity token buffer could not hold every token of the input.
    CapacityExceeded,
    /// The text does not name any entry of the command table.
    UnknownCommand,
    /// The text does not name a known client transport.
    UnknownClient,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CapacityExceeded => f.write_str("token buffer capacity exceeded"),
            Error::UnknownCommand => f.write_str("unknown command"),
            Error::UnknownClient => f.write_str("unknown client kind"),
        }
    }
}

impl core::error::Error for Error {}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::CapacityExceeded => defmt::write!(f, "CapacityExceeded"),
            Error::UnknownCommand => defmt::write!(f, "UnknownCommand"),
            Error::UnknownClient => defmt::write!(f, "UnknownClient"),
        }
    }
}
