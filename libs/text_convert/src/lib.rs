//! Converts text between its plain form and a handful of textual encodings.
//!
//! Every conversion is selected by a [`Mode`] and is a pure function of the
//! input text and that mode. Nothing is cached between calls, so switching the
//! mode re-interprets the same raw input rather than the previous output.
//!
//! The encodings themselves live in [`format`]. Each provides a pair of
//! `encode` and `decode` functions writing to a [`fmt::Write`], plus
//! `to_string` and `from_str` convenience functions.
//!
//! Use [`convert`] when only a display value is needed, or [`try_convert`] to
//! get at the typed [`Error`].
//!
//! # Examples
//!
//! ```
//! use text_convert::{Mode, convert};
//!
//! let result = convert("A", Mode::TextToBinary);
//! assert_eq!(result.output, "01000001");
//! assert_eq!(result.warning, None);
//!
//! let result = convert("not base64!!", Mode::Base64ToText);
//! assert_eq!(result.output, "");
//! assert_eq!(
//!     result.warning.as_deref(),
//!     Some("Invalid Base64 string. Unable to decode.")
//! );
//! ```

use std::fmt;

// for benchmarks
#[cfg(test)]
use criterion as _;

pub mod format;
mod mode;
mod state;
#[cfg(test)]
mod tests;

pub use mode::{Format, Mode, ParseModeError};
pub use state::ConverterState;

/// Error converting text.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A whitespace-separated token could not be read as a character code.
    #[error("token {token:?} is not a valid {format} character code")]
    InvalidToken { format: Format, token: String },
    /// The Base64 text was malformed.
    #[error("invalid base64 input: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    /// A character cannot be represented as a single byte.
    #[error("character {ch:?} is outside the Latin-1 range")]
    OutOfRange { ch: char },
    /// The written buffer returned an error.
    #[error(transparent)]
    Write(#[from] fmt::Error),
}

impl Error {
    /// Gets the user-facing warning text for this error.
    #[must_use]
    pub fn warning(&self) -> &'static str {
        match self {
            Self::InvalidToken { format, .. } => format.invalid_warning(),
            Self::InvalidBase64(_) => Format::Base64.invalid_warning(),
            Self::OutOfRange { .. } => {
                "Input contains characters outside the Latin-1 range. Unable to encode."
            },
            Self::Write(_) => "Unable to write the output.",
        }
    }
}

/// The outcome of a single [`convert`] call.
///
/// When `warning` is set, `output` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionResult {
    pub output: String,
    pub warning: Option<String>,
}

impl ConversionResult {
    /// Creates a successful result without a warning.
    #[must_use]
    pub fn ok(output: String) -> Self {
        Self {
            output,
            warning: None,
        }
    }

    /// Creates a failed result, holding the error's warning and no output.
    #[must_use]
    pub fn failed(error: &Error) -> Self {
        Self {
            output: String::new(),
            warning: Some(error.warning().to_owned()),
        }
    }

    /// Whether the conversion produced a warning.
    #[must_use]
    pub fn has_warning(&self) -> bool {
        self.warning.is_some()
    }
}

/// Converts `input` according to `mode`.
///
/// This never fails. Errors are reported as the result's `warning` alongside
/// an empty output.
#[must_use]
pub fn convert(input: &str, mode: Mode) -> ConversionResult {
    match try_convert(input, mode) {
        Ok(output) => ConversionResult::ok(output),
        Err(why) => {
            log::debug!("conversion with {mode} failed: {why}");
            ConversionResult::failed(&why)
        },
    }
}

/// Converts `input` according to `mode`, returning the typed error on failure.
///
/// # Errors
///
/// Returns [`Err`] if `input` is not valid for the decoding direction of
/// `mode`, or if it contains characters that [`Format::Base64`] cannot encode.
pub fn try_convert(input: &str, mode: Mode) -> Result<String, Error> {
    use format::{ascii, base64, binary, hex};

    let output = match mode {
        Mode::TextToBinary => binary::to_string(input),
        Mode::BinaryToText => binary::from_str(input)?,
        Mode::TextToAscii => ascii::to_string(input),
        Mode::AsciiToText => ascii::from_str(input)?,
        Mode::TextToBase64 => base64::to_string(input)?,
        Mode::Base64ToText => base64::from_str(input)?,
        Mode::TextToHex => hex::to_string(input),
        Mode::HexToText => hex::from_str(input)?,
    };

    Ok(output)
}
