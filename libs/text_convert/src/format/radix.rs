use std::fmt;

use crate::{Error, Format};

/// Writes one token per character of `text`, separated by single spaces.
pub fn encode<W, F>(mut writer: W, text: &str, mut token: F) -> fmt::Result
where
    W: fmt::Write,
    F: FnMut(&mut W, u32) -> fmt::Result,
{
    let mut chars = text.chars();
    if let Some(first) = chars.next() {
        token(&mut writer, u32::from(first))?;
        for c in chars {
            writer.write_char(' ')?;
            token(&mut writer, u32::from(c))?;
        }
    }

    Ok(())
}

/// Reads whitespace-separated character codes in the given `radix`.
///
/// Nothing is written unless every token is valid.
pub fn decode<W: fmt::Write>(
    mut writer: W,
    input: &str,
    radix: u32,
    format: Format,
) -> Result<(), Error> {
    let decoded = input
        .split_ascii_whitespace()
        .map(|token| decode_token(token, radix, format))
        .collect::<Result<String, Error>>()?;

    writer.write_str(&decoded)?;
    Ok(())
}

fn decode_token(token: &str, radix: u32, format: Format) -> Result<char, Error> {
    // from_str_radix would accept a leading sign
    let code = if token.starts_with('+') {
        None
    } else {
        u32::from_str_radix(token, radix).ok()
    };

    code.and_then(char::from_u32)
        .ok_or_else(|| Error::InvalidToken {
            format,
            token: token.to_owned(),
        })
}
