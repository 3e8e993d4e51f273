//! Encodes text as standard Base64.
//!
//! The text is first converted to bytes by treating every character as one
//! Latin-1 byte. Characters above `U+FF` cannot be encoded.
//!
//! Decoding is forgiving in the same way browsers' `atob` is:
//!
//! - ASCII white-space anywhere in the input is ignored.
//! - Padding may be omitted. If present, it must complete the input to a
//!   multiple of 4 symbols.
//! - Unused trailing bits of the last symbol do not have to be zero.
//!
//! Every decoded byte is mapped back to the Latin-1 character with the same
//! value.

use std::fmt;

use ::base64::DecodeError;
use ::base64::alphabet;
use ::base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use ::base64::engine::{DecodePaddingMode, Engine as _};

use crate::Error;

const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Encodes `text` as Base64, returning a [`String`] with the result.
///
/// # Errors
///
/// Returns [`Err`] if `text` contains characters above `U+FF`.
pub fn to_string(text: &str) -> Result<String, Error> {
    let mut result = String::with_capacity(text.len().div_ceil(3) * 4);
    encode(&mut result, text)?;
    Ok(result)
}

/// Encodes `text` as Base64, writing it to a buffer.
///
/// # Errors
///
/// Returns [`Err`] if `text` contains characters above `U+FF` or the writer
/// returned an error. Nothing is written in the former case.
pub fn encode<W: fmt::Write>(mut writer: W, text: &str) -> Result<(), Error> {
    let bytes = text
        .chars()
        .map(|ch| u8::try_from(ch).map_err(|_| Error::OutOfRange { ch }))
        .collect::<Result<Vec<u8>, Error>>()?;

    writer.write_str(&STANDARD.encode(bytes))?;
    Ok(())
}

/// Equivalent to [`decode`] with a [`String`] as the buffer.
///
/// # Errors
///
/// Returns [`Err`] if the input is not valid Base64.
pub fn from_str(input: &str) -> Result<String, Error> {
    let mut result = String::with_capacity(input.len());
    decode(&mut result, input)?;
    Ok(result)
}

/// Decodes Base64, writing the Latin-1 text to a buffer.
///
/// # Errors
///
/// Returns [`Err`] if the input is not valid Base64 or the writer returned an
/// error.
pub fn decode<W: fmt::Write>(mut writer: W, input: &str) -> Result<(), Error> {
    let compact: Vec<u8> = input
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    let mut data = compact.as_slice();
    if data.len().is_multiple_of(4) {
        for _ in 0..2 {
            if let [rest @ .., b'='] = data {
                data = rest;
            }
        }
    }

    // any padding left over is misplaced
    if let Some(offset) = data.iter().position(|&b| b == b'=') {
        return Err(DecodeError::InvalidByte(offset, b'=').into());
    }

    for byte in FORGIVING.decode(data)? {
        writer.write_char(char::from(byte))?;
    }

    Ok(())
}
