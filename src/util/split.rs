//! Single-delimiter tokenizer.
//!
//! Breaks a line of text at every occurrence of one delimiter character. Empty
//! tokens are kept, so a text with `k` delimiters always produces `k + 1`
//! tokens, in the order they appear:
//!
//! ```text
//! "a,b,c"  ->  ["a", "b", "c"]
//! "a,,c"   ->  ["a", "", "c"]
//! "a,b,"   ->  ["a", "b", ""]
//! ""       ->  [""]
//! "abc"    ->  ["abc"]
//! ```
//!
//! Tokens are borrowed slices of the input. The container they end up in is
//! picked by the caller:
//!
//! - [`split`] collects into anything implementing [`FromIterator`]
//!   (`Vec`, `VecDeque`, `LinkedList`, ...)
//! - [`try_split`] fills a fixed-capacity `heapless::Vec` without panicking
//! - [`tokens`] returns the lazy [`Split`] iterator and needs no container
//! - `split_owned` (feature `alloc`) copies each token into an owned `String`

use core::iter::FusedIterator;

use super::error::Error;

/// Default capacity for [`BoundedTokens`].
///
/// Matches the argument limit commonly used by small command shells: the
/// command word plus up to fifteen arguments.
pub const DEFAULT_MAX_TOKENS: usize = 16;

/// Fixed-capacity token buffer used by [`try_split`].
pub type BoundedTokens<'a, const N: usize = DEFAULT_MAX_TOKENS> = heapless::Vec<&'a str, N>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Emitting tokens that end at a delimiter (or the single token of a
    /// delimiter-free text).
    Scanning,
    /// Every delimiter has been consumed; the text after the last one is left.
    Tail,
    Done,
}

/// Lazy iterator over the tokens of a delimiter-separated text.
///
/// Created by [`tokens`] or [`Split::new`]. The iterator never allocates and
/// always yields at least one token, even for empty input.
///
/// # Examples
///
/// ```rust
/// use libcmd::util::split::Split;
///
/// let mut parts = Split::new("DIR,/,-l", ',');
/// assert_eq!(parts.next(), Some("DIR"));
/// assert_eq!(parts.remainder(), Some("/,-l"));
/// assert_eq!(parts.next(), Some("/"));
/// assert_eq!(parts.next(), Some("-l"));
/// assert_eq!(parts.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Split<'a> {
    text: &'a str,
    delimiter: char,
    // Byte offset where the next token starts.
    pos: usize,
    // Byte offset of the next delimiter at or after `pos`.
    next: Option<usize>,
    state: State,
}

impl<'a> Split<'a> {
    /// Create a tokenizer over `text` breaking at each `delimiter`.
    pub fn new(text: &'a str, delimiter: char) -> Self {
        Self {
            text,
            delimiter,
            pos: 0,
            next: find_from(text, delimiter, 0),
            state: State::Scanning,
        }
    }

    /// The delimiter this tokenizer breaks on.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// The part of the text not yet returned as tokens.
    ///
    /// Returns `None` once the iterator is exhausted. Useful for taking the
    /// first word of a line as the command and keeping the rest verbatim.
    pub fn remainder(&self) -> Option<&'a str> {
        match self.state {
            State::Done => None,
            State::Scanning | State::Tail => Some(&self.text[self.pos..]),
        }
    }
}

impl<'a> Iterator for Split<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Done => None,
            State::Tail => {
                self.state = State::Done;
                Some(&self.text[self.pos..])
            }
            State::Scanning => {
                // No delimiter at all: the whole text is the only token.
                let Some(at) = self.next else {
                    self.state = State::Done;
                    return Some(&self.text[self.pos..]);
                };

                let token = &self.text[self.pos..at];
                self.pos = at + self.delimiter.len_utf8();
                self.next = find_from(self.text, self.delimiter, self.pos);

                if self.next.is_none() && self.pos != 0 {
                    self.state = State::Tail;
                }

                Some(token)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            State::Done => (0, Some(0)),
            State::Tail => (1, Some(1)),
            State::Scanning => {
                let lower = if self.next.is_some() { 2 } else { 1 };
                let remaining = self.text.len() - self.pos;
                (lower, Some(remaining / self.delimiter.len_utf8() + 1))
            }
        }
    }
}

impl FusedIterator for Split<'_> {}

fn find_from(text: &str, delimiter: char, from: usize) -> Option<usize> {
    text.get(from..)?.find(delimiter).map(|i| from + i)
}

/// Lazily tokenize `text` on `delimiter`.
///
/// # Examples
///
/// ```rust
/// use libcmd::tokens;
///
/// assert_eq!(tokens("a,b,", ',').count(), 3);
/// assert!(tokens("", ',').eq([""]));
/// ```
pub fn tokens(text: &str, delimiter: char) -> Split<'_> {
    Split::new(text, delimiter)
}

/// Split `text` on `delimiter` into a container of the caller's choosing.
///
/// Any container that can be built by appending tokens in order works. The
/// function never fails: a text without the delimiter yields a single token
/// holding the whole text, and empty input yields one empty token.
///
/// # Examples
///
/// ```rust
/// use std::collections::VecDeque;
/// use libcmd::split;
///
/// let v: Vec<&str> = split("a,b,c", ',');
/// assert_eq!(v, ["a", "b", "c"]);
///
/// let d: VecDeque<&str> = split("abc", ',');
/// assert_eq!(d, ["abc"]);
/// ```
pub fn split<'a, C>(text: &'a str, delimiter: char) -> C
where
    C: FromIterator<&'a str>,
{
    tokens(text, delimiter).collect()
}

/// Split `text` on `delimiter` into a fixed-capacity buffer.
///
/// # Returns
///
/// * `Ok(tokens)` - Every token fit in the buffer
/// * `Err(Error::CapacityExceeded)` - The text holds more than `N` tokens
///
/// # Examples
///
/// ```rust
/// use libcmd::{try_split, Error};
///
/// let args = try_split::<3>("EXIT,now,", ',').unwrap();
/// assert_eq!(args.as_slice(), &["EXIT", "now", ""]);
///
/// assert_eq!(try_split::<2>("a,b,c", ','), Err(Error::CapacityExceeded));
/// ```
pub fn try_split<const N: usize>(
    text: &str,
    delimiter: char,
) -> Result<BoundedTokens<'_, N>, Error> {
    let mut out: BoundedTokens<'_, N> = heapless::Vec::new();
    for token in tokens(text, delimiter) {
        out.push(token).map_err(|_| Error::CapacityExceeded)?;
    }
    Ok(out)
}

/// Split `text` on `delimiter` into owned strings.
///
/// For callers that must keep the tokens after the input buffer is reused,
/// such as a line buffer that is cleared once a command has been read.
#[cfg(feature = "alloc")]
pub fn split_owned(text: &str, delimiter: char) -> alloc::vec::Vec<alloc::string::String> {
    tokens(text, delimiter).map(alloc::string::String::from).collect()
}
