//! Encodes text as space-separated decimal character codes.
//!
//! `"Hi"` becomes `"72 105"`.

use std::fmt;

use super::radix;
use crate::{Error, Format};

/// Encodes `text` as decimal codes, returning a [`String`] with the result.
#[must_use]
pub fn to_string(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 4);
    encode(&mut result, text).expect("write to String cannot fail");
    result
}

/// Encodes `text` as decimal codes, writing it to a buffer.
pub fn encode<W: fmt::Write>(writer: W, text: &str) -> fmt::Result {
    radix::encode(writer, text, |w, code| write!(w, "{code}"))
}

/// Equivalent to [`decode`] with a [`String`] as the buffer.
///
/// # Errors
///
/// Returns [`Err`] if any token is not a decimal character code.
pub fn from_str(input: &str) -> Result<String, Error> {
    let mut result = String::with_capacity(input.len() / 2);
    decode(&mut result, input)?;
    Ok(result)
}

/// Decodes decimal character codes, writing the text to a buffer.
///
/// # Errors
///
/// Returns [`Err`] if any token is not a decimal character code or the writer
/// returned an error.
pub fn decode<W: fmt::Write>(writer: W, input: &str) -> Result<(), Error> {
    radix::decode(writer, input, 10, Format::Ascii)
}
