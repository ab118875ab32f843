//! Splitting an input line into whitespace-delimited tokens.
//!
//! Lines are raw bytes. Tokens are handed to programs and to `chdir` exactly
//! as typed; they are only decoded for matching builtin names and for
//! messages.

use crate::error::ShellResult;
use std::borrow::Cow;
use std::ffi::OsStr;

/// Bytes that separate tokens: space, tab, CR, LF and bell.
pub const DELIMITERS: [u8; 5] = *b" \t\r\n\x07";

/// Initial token capacity, and the step by which it grows.
pub const TOKEN_CAPACITY: usize = 64;

/// Tokens of one line, borrowed from that line.
///
/// The first token is the command name. Indexing past the last token with
/// [`Tokens::get`] yields `None`, which is how a consumer finds the end of a
/// variable-length argument list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens<'a> {
    items: Vec<&'a [u8]>,
}

impl<'a> Tokens<'a> {
    /// The command name, or `None` for a blank line.
    pub fn command(&self) -> Option<&'a [u8]> {
        self.get(0)
    }

    /// Tokens following the command name.
    pub fn args(&self) -> &[&'a [u8]] {
        self.items.get(1..).unwrap_or(&[])
    }

    pub fn get(&self, index: usize) -> Option<&'a [u8]> {
        self.items.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[&'a [u8]] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        self.items.iter().copied()
    }
}

/// The token as an OS string, byte for byte on unix.
#[cfg(unix)]
pub fn token_os_str(token: &[u8]) -> Cow<'_, OsStr> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(OsStr::from_bytes(token))
}

#[cfg(not(unix))]
pub fn token_os_str(token: &[u8]) -> Cow<'_, OsStr> {
    match String::from_utf8_lossy(token) {
        Cow::Borrowed(s) => Cow::Borrowed(OsStr::new(s)),
        Cow::Owned(s) => Cow::Owned(s.into()),
    }
}

/// The token as text, for messages.
pub fn token_display(token: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(token)
}

/// Splits `line` on runs of [`DELIMITERS`], dropping empty fields.
///
/// Token storage grows by [`TOKEN_CAPACITY`] at a time. A failed reservation
/// is reported as [`ShellError::Allocation`](crate::ShellError::Allocation).
pub fn split_into_tokens(line: &[u8]) -> ShellResult<Tokens<'_>> {
    let mut items: Vec<&[u8]> = Vec::new();
    items.try_reserve_exact(TOKEN_CAPACITY)?;

    for token in line
        .split(|b| DELIMITERS.contains(b))
        .filter(|t| !t.is_empty())
    {
        if items.len() == items.capacity() {
            items.try_reserve_exact(TOKEN_CAPACITY)?;
        }
        items.push(token);
    }

    Ok(Tokens { items })
}
