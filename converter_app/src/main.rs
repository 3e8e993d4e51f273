use std::borrow::Cow;
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::Parser as _;

mod build;
mod cli;
mod config;
mod logging;

fn main() -> Result<ExitCode> {
    use std::panic;

    use crate::build::{GIT_HASH, VERSION};
    use crate::cli::Cli;
    use crate::config::Config;

    let cli = Cli::parse();
    if let Some(color) = cli.color {
        logging::override_color(color);
    }

    // run the program and clean up
    let res = run(cli);
    if let Err(why) = &res {
        log::error!("Exiting due to error: {why:?}");
    }

    log::logger().flush();
    return res;

    // actual main logic
    fn run(cli: Cli) -> Result<ExitCode> {
        let config = build_config()?;
        logging::init(&config.log.log4rs)?;

        if config.log.panic {
            // register the custom panic handler after logging is set up
            panic::set_hook(Box::new(on_panic));
        }

        log::debug!(target: "converter_app::version", "Converter v{VERSION} - {GIT_HASH}");
        cli.command.run(&config)
    }

    /// Custom panic handler that writes the panic to the logger and flushes it.
    fn on_panic(info: &panic::PanicHookInfo<'_>) {
        use std::backtrace::Backtrace;
        use std::io::{Write as _, stderr};

        let backtrace = Backtrace::force_capture();
        let thread = std::thread::current();
        let name = thread.name().unwrap_or("<unnamed>");

        // just in case the loggers fail or are empty
        _ = writeln!(stderr(), "thread '{name}' {info}");
        log::error!("thread '{name}' {info}\n{backtrace}");
        log::logger().flush();
    }

    fn profile() -> Result<Cow<'static, str>> {
        use std::env::VarError::NotPresent;
        use std::env::var;

        match var("CONVERTER_PROFILE") {
            Ok(value) => Ok(value.into()),
            Err(NotPresent) => Ok("release".into()),
            Err(err) => Err(err).context("cannot load CONVERTER_PROFILE env variable"),
        }
    }

    fn build_config() -> Result<Config> {
        use crate::config::setup::{Builder, Env, File, TomlText};

        let profile = profile()?;
        let profile_config = format!("converter_app.{profile}.toml");
        let default_config = include_str!("../assets/default_config.toml");

        Builder::new()
            .add_layer(TomlText::new(default_config))
            .add_layer(File::new("converter_app.toml").required(false))
            .add_layer(File::new(&profile_config).required(false))
            .add_layer(Env::new("CONVERTER_"))
            .build()
    }
}
