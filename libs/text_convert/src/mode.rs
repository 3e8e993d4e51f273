use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::de::{Deserialize, Deserializer, Error as _};

/// An encoding that text can be converted to and from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Base-2 character codes.
    Binary,
    /// Decimal character codes.
    Ascii,
    /// Standard Base64 of the Latin-1 bytes.
    Base64,
    /// Base-16 character codes.
    Hex,
}

impl Format {
    /// The warning shown when data in this format cannot be decoded.
    #[must_use]
    pub const fn invalid_warning(self) -> &'static str {
        match self {
            Self::Binary => "Invalid binary string. Unable to decode.",
            Self::Ascii => "Invalid ASCII string. Unable to decode.",
            Self::Base64 => "Invalid Base64 string. Unable to decode.",
            Self::Hex => "Invalid hexadecimal string. Unable to decode.",
        }
    }

    /// The display name of the format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Ascii => "ASCII",
            Self::Base64 => "Base64",
            Self::Hex => "hexadecimal",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Selects which direction and encoding a conversion uses.
///
/// Modes are displayed by their camel-case name, i.e. `textToBinary`.
/// Parsing ignores case and also accepts the words of the name separated by
/// `-` or `_`, so `text-to-binary` and `TEXT_TO_BINARY` work too.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    TextToBinary,
    BinaryToText,
    TextToAscii,
    AsciiToText,
    TextToBase64,
    Base64ToText,
    TextToHex,
    HexToText,
}

impl Mode {
    /// All modes, with each encode direction followed by its decode direction.
    pub const ALL: [Self; 8] = [
        Self::TextToBinary,
        Self::BinaryToText,
        Self::TextToAscii,
        Self::AsciiToText,
        Self::TextToBase64,
        Self::Base64ToText,
        Self::TextToHex,
        Self::HexToText,
    ];

    /// The name used for display and parsing.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TextToBinary => "textToBinary",
            Self::BinaryToText => "binaryToText",
            Self::TextToAscii => "textToAscii",
            Self::AsciiToText => "asciiToText",
            Self::TextToBase64 => "textToBase64",
            Self::Base64ToText => "base64ToText",
            Self::TextToHex => "textToHex",
            Self::HexToText => "hexToText",
        }
    }

    /// A human-readable label, i.e. "Text to Binary".
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TextToBinary => "Text to Binary",
            Self::BinaryToText => "Binary to Text",
            Self::TextToAscii => "Text to ASCII",
            Self::AsciiToText => "ASCII to Text",
            Self::TextToBase64 => "Text to Base64",
            Self::Base64ToText => "Base64 to Text",
            Self::TextToHex => "Text to Hexadecimal",
            Self::HexToText => "Hexadecimal to Text",
        }
    }

    /// The encoding this mode converts to or from.
    #[must_use]
    pub const fn format(self) -> Format {
        match self {
            Self::TextToBinary | Self::BinaryToText => Format::Binary,
            Self::TextToAscii | Self::AsciiToText => Format::Ascii,
            Self::TextToBase64 | Self::Base64ToText => Format::Base64,
            Self::TextToHex | Self::HexToText => Format::Hex,
        }
    }

    /// Whether this mode converts plain text into its [`format`](Self::format).
    #[must_use]
    pub const fn is_encode(self) -> bool {
        matches!(
            self,
            Self::TextToBinary | Self::TextToAscii | Self::TextToBase64 | Self::TextToHex
        )
    }

    /// Gets the mode converting in the opposite direction.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::TextToBinary => Self::BinaryToText,
            Self::BinaryToText => Self::TextToBinary,
            Self::TextToAscii => Self::AsciiToText,
            Self::AsciiToText => Self::TextToAscii,
            Self::TextToBase64 => Self::Base64ToText,
            Self::Base64ToText => Self::TextToBase64,
            Self::TextToHex => Self::HexToText,
            Self::HexToText => Self::TextToHex,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error parsing a [`Mode`] from a string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown conversion mode {0:?}")]
pub struct ParseModeError(String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn same_name(name: &str, input: &str) -> bool {
            if name.eq_ignore_ascii_case(input) {
                return true;
            }

            // one separator kind, placed before every word of the camel-case name
            let Some(sep) = input.bytes().find(|b| matches!(b, b'-' | b'_')) else {
                return false;
            };

            let mut input = input.bytes();
            for (index, b) in name.bytes().enumerate() {
                if index != 0 && b.is_ascii_uppercase() && input.next() != Some(sep) {
                    return false;
                }

                if !input.next().is_some_and(|i| i.eq_ignore_ascii_case(&b)) {
                    return false;
                }
            }

            input.next().is_none()
        }

        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| same_name(m.name(), s))
            .ok_or_else(|| ParseModeError(s.to_owned()))
    }
}

impl<'de> Deserialize<'de> for Mode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = <Cow<'de, str>>::deserialize(deserializer)?;
        name.parse().map_err(D::Error::custom)
    }
}
