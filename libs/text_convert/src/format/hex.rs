//! Encodes text as space-separated base-16 character codes.
//!
//! Codes are lower-case and zero-padded to at least 2 digits, so `"\n!"`
//! becomes `"0a 21"`. Decoding accepts either case.

use std::fmt;

use super::radix;
use crate::{Error, Format};

/// Encodes `text` as hex codes, returning a [`String`] with the result.
#[must_use]
pub fn to_string(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 3);
    encode(&mut result, text).expect("write to String cannot fail");
    result
}

/// Encodes `text` as hex codes, writing it to a buffer.
pub fn encode<W: fmt::Write>(writer: W, text: &str) -> fmt::Result {
    radix::encode(writer, text, |w, code| write!(w, "{code:02x}"))
}

/// Equivalent to [`decode`] with a [`String`] as the buffer.
///
/// # Errors
///
/// Returns [`Err`] if any token is not a base-16 character code.
pub fn from_str(input: &str) -> Result<String, Error> {
    let mut result = String::with_capacity(input.len() / 3);
    decode(&mut result, input)?;
    Ok(result)
}

/// Decodes hex character codes, writing the text to a buffer.
///
/// # Errors
///
/// Returns [`Err`] if any token is not a base-16 character code or the writer
/// returned an error.
pub fn decode<W: fmt::Write>(writer: W, input: &str) -> Result<(), Error> {
    radix::decode(writer, input, 16, Format::Hex)
}
