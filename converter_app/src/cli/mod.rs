use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;

mod convert;
mod session;
mod voice;

/// Converts text between plain text, binary, ASCII codes, Base64 and hex, and
/// drives a voice search box from scripted recognizer events.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Override whether log output is colored.
    ///
    /// Auto-detection is performed, but in case it is wrong, you may use this
    /// to override the default.
    #[arg(long, global = true)]
    pub color: Option<bool>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Converts a single text and prints the result.
    Convert(convert::ConvertArgs),
    /// Reads input and mode changes line by line, printing every new result.
    Session(session::SessionArgs),
    /// Runs the voice search box against a script of recognizer events.
    Voice(voice::VoiceArgs),
}

impl Command {
    pub fn run(self, config: &Config) -> Result<ExitCode> {
        match self {
            Self::Convert(args) => args.run(config),
            Self::Session(args) => args.run(config),
            Self::Voice(args) => args.run(config),
        }
    }
}
