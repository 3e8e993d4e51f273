use std::sync::OnceLock;

use log4rs::config::Deserializers;

mod default_appender;
mod default_pattern;
mod term;

// stack buffer size used for custom appenders.
// 1 KiB should be sufficient for most messages.
const WRITE_BUF_SIZE: usize = 0x400;

static COLOR_OVERRIDE: OnceLock<bool> = OnceLock::new();

/// Forces color on or off for appenders created afterwards.
///
/// Takes precedence over the appender configuration. Only the first call has
/// any effect.
pub fn override_color(color: bool) {
    _ = COLOR_OVERRIDE.set(color);
}

fn color_override() -> Option<bool> {
    COLOR_OVERRIDE.get().copied()
}

pub fn deserializers() -> Deserializers {
    let mut d = Deserializers::new();
    d.insert("default", default_appender::DefaultAppenderDeserializer);
    d.insert("default", default_pattern::DefaultPatternDeserializer);
    d
}

/// Initializes the global logger from the raw configuration.
pub fn init(config: &log4rs::config::RawConfig) -> anyhow::Result<()> {
    let deserializers = deserializers();
    let (appenders, errors) = config.appenders_lossy(&deserializers);
    if !errors.is_empty() {
        return Err(errors.into());
    }

    let config = log4rs::Config::builder()
        .appenders(appenders)
        .loggers(config.loggers())
        .build(config.root())?;

    log4rs::init_config(config)?;
    Ok(())
}
