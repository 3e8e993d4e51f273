//! Encodes text as space-separated base-2 character codes.
//!
//! Each code is zero-padded to at least 8 digits, so `"Hi"` becomes
//! `"01001000 01101001"`. Characters above `U+FF` produce longer tokens.

use std::fmt;

use super::radix;
use crate::{Error, Format};

/// Encodes `text` as binary, returning a [`String`] with the result.
///
/// Use [`from_str`] to reverse the operation.
#[must_use]
pub fn to_string(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 9);
    encode(&mut result, text).expect("write to String cannot fail");
    result
}

/// Encodes `text` as binary, writing it to a buffer.
///
/// This can only return an [`Err`] if the `writer` does so.
pub fn encode<W: fmt::Write>(writer: W, text: &str) -> fmt::Result {
    radix::encode(writer, text, |w, code| write!(w, "{code:08b}"))
}

/// Equivalent to [`decode`] with a [`String`] as the buffer.
///
/// # Errors
///
/// Returns [`Err`] if any token is not a base-2 character code.
pub fn from_str(input: &str) -> Result<String, Error> {
    let mut result = String::with_capacity(input.len() / 8);
    decode(&mut result, input)?;
    Ok(result)
}

/// Decodes binary character codes, writing the text to a buffer.
///
/// # Errors
///
/// Returns [`Err`] if any token is not a base-2 character code or the writer
/// returned an error.
pub fn decode<W: fmt::Write>(writer: W, input: &str) -> Result<(), Error> {
    radix::decode(writer, input, 2, Format::Binary)
}
