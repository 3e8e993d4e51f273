use serde::Deserialize;
use text_convert::Mode;
use voice_search::Language;

pub mod setup;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub converter: ConverterConfig,
    #[serde(default)]
    pub voice: VoiceConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct ConverterConfig {
    /// The mode used when none is given on the command line.
    #[serde(default)]
    pub mode: Mode,
}

#[derive(Debug, Default, Deserialize)]
pub struct VoiceConfig {
    #[serde(default)]
    pub language: Language,
}

const fn default_panic() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct LogConfig {
    /// Whether panics are written to the log.
    #[serde(default = "default_panic")]
    pub panic: bool,
    #[serde(flatten)]
    pub log4rs: log4rs::config::RawConfig,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            panic: default_panic(),
            log4rs: log4rs::config::RawConfig::default(),
        }
    }
}
