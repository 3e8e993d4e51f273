//! The individual encodings.
//!
//! [`binary`], [`ascii`] and [`hex`] write one whitespace-separated token per
//! input character, holding its code point in the respective radix. Decoding
//! reads the tokens back, rejecting the whole input if any token is not a
//! valid character code.
//!
//! [`base64`] treats the input as Latin-1 bytes and encodes those as
//! standard Base64.
//!
//! Each format provides a pair of `encode` and `decode` functions. "Encoding"
//! takes plain text and returns the formatted text whereas "decoding" does the
//! inverse.

pub mod ascii;
pub mod base64;
pub mod binary;
pub mod hex;
mod radix;
