use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::de::{Deserialize, Deserializer, Error as _};

/// A recognition language supported by the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    code: &'static str,
    name: &'static str,
}

impl Language {
    pub const EN_US: Self = Self::new("en-US", "English (US)");
    pub const ES_ES: Self = Self::new("es-ES", "Spanish (Spain)");
    pub const FR_FR: Self = Self::new("fr-FR", "French (France)");
    pub const DE_DE: Self = Self::new("de-DE", "German (Germany)");
    pub const IT_IT: Self = Self::new("it-IT", "Italian (Italy)");
    pub const JA_JP: Self = Self::new("ja-JP", "Japanese (Japan)");

    /// All languages that can be selected.
    pub const SUPPORTED: &[Self] = &[
        Self::EN_US,
        Self::ES_ES,
        Self::FR_FR,
        Self::DE_DE,
        Self::IT_IT,
        Self::JA_JP,
    ];

    const fn new(code: &'static str, name: &'static str) -> Self {
        Self { code, name }
    }

    /// The BCP 47 language tag, i.e. `en-US`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        self.code
    }

    /// The display name, i.e. `English (US)`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// Finds a supported language by its tag, ignoring case.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::SUPPORTED
            .iter()
            .find(|l| l.code.eq_ignore_ascii_case(code))
            .copied()
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::EN_US
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

/// Error parsing a [`Language`] that isn't supported.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unsupported recognition language {0:?}")]
pub struct UnknownLanguage(String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::from_code(s).ok_or_else(|| UnknownLanguage(s.to_owned()))
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = <Cow<'de, str>>::deserialize(deserializer)?;
        code.parse().map_err(D::Error::custom)
    }
}
