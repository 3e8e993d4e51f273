//! A line-based stand-in for the converter form.
//!
//! Every line either replaces the input or runs a command. The result is
//! recomputed and printed after each change:
//!
//! - `:mode <MODE>` selects a mode.
//! - `:modes` lists the available modes.
//! - `:quit` ends the session.
//! - `::text` sets the input to `:text`.
//! - Any other line becomes the new input.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::Args;
use text_convert::{ConverterState, Mode};

use crate::config::Config;

#[derive(Debug, Args)]
pub struct SessionArgs {
    /// The initially selected mode. Defaults to the configured mode.
    #[arg(short, long)]
    mode: Option<Mode>,
}

impl SessionArgs {
    pub fn run(self, config: &Config) -> Result<ExitCode> {
        let mode = self.mode.unwrap_or(config.converter.mode);
        let session = Session::new(mode);

        session.run(io::stdin().lock(), io::stdout().lock())?;
        Ok(ExitCode::SUCCESS)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Input(&'a str),
    Mode(&'a str),
    Modes,
    Quit,
    Unknown(&'a str),
}

impl<'a> Line<'a> {
    fn parse(line: &'a str) -> Self {
        let Some(command) = line.strip_prefix(':') else {
            return Self::Input(line);
        };

        if command.starts_with(':') {
            return Self::Input(command);
        }

        match command.trim().split_once(' ') {
            Some(("mode", name)) => Self::Mode(name),
            None if command.trim() == "modes" => Self::Modes,
            None if command.trim() == "quit" => Self::Quit,
            _ => Self::Unknown(command),
        }
    }
}

#[derive(Debug)]
pub struct Session {
    state: ConverterState,
}

impl Session {
    pub fn new(mode: Mode) -> Self {
        Self {
            state: ConverterState::new(mode),
        }
    }

    pub fn run<R: BufRead, W: Write>(mut self, input: R, mut out: W) -> Result<()> {
        writeln!(out, "mode: {}", self.state.mode())?;

        for line in input.lines() {
            let line = line.context("cannot read session input")?;
            match Line::parse(&line) {
                Line::Input(text) => {
                    self.state.set_input(text);
                    self.print_result(&mut out)?;
                },
                Line::Mode(name) => match name.parse::<Mode>() {
                    Ok(mode) => {
                        self.state.set_mode(mode);
                        writeln!(out, "mode: {mode}")?;
                        self.print_result(&mut out)?;
                    },
                    Err(why) => writeln!(out, "error: {why}")?,
                },
                Line::Modes => {
                    for mode in Mode::ALL {
                        let marker = if mode == self.state.mode() { '*' } else { ' ' };
                        writeln!(out, "{marker} {:<13} {}", mode.name(), mode.label())?;
                    }
                },
                Line::Quit => break,
                Line::Unknown(command) => writeln!(out, "error: unknown command {command:?}")?,
            }

            out.flush()?;
        }

        Ok(())
    }

    fn print_result<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.state.warning() {
            Some(warning) => writeln!(out, "! {warning}"),
            None => writeln!(out, "= {}", self.state.output()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_session(mode: Mode, script: &str) -> String {
        let mut out = Vec::new();
        Session::new(mode)
            .run(script.as_bytes(), &mut out)
            .expect("session must not fail");

        String::from_utf8(out).expect("output is utf-8")
    }

    #[test]
    fn parse_lines() {
        assert_eq!(Line::parse("hello"), Line::Input("hello"));
        assert_eq!(Line::parse("::colon"), Line::Input(":colon"));
        assert_eq!(Line::parse(":mode hexToText"), Line::Mode("hexToText"));
        assert_eq!(Line::parse(":modes"), Line::Modes);
        assert_eq!(Line::parse(":quit"), Line::Quit);
        assert_eq!(Line::parse(":bogus"), Line::Unknown("bogus"));
    }

    #[test]
    fn mode_switch_reinterprets_input() {
        let out = run_session(Mode::TextToBinary, "A\n:mode binaryToText\n");

        assert_eq!(
            out,
            "mode: textToBinary\n\
             = 01000001\n\
             mode: binaryToText\n\
             ! Invalid binary string. Unable to decode.\n"
        );
    }

    #[test]
    fn decode_after_new_input() {
        let out = run_session(Mode::HexToText, "4a 6b\n:mode ascii-to-text\n72 105\n");

        assert_eq!(
            out,
            "mode: hexToText\n\
             = Jk\n\
             mode: asciiToText\n\
             ! Invalid ASCII string. Unable to decode.\n\
             = Hi\n"
        );
    }

    #[test]
    fn quit_stops_reading() {
        let out = run_session(Mode::TextToAscii, "A\n:quit\nB\n");
        assert_eq!(out, "mode: textToAscii\n= 65\n");
    }

    #[test]
    fn unknown_mode_keeps_state() {
        let out = run_session(Mode::TextToHex, ":mode textToOctal\nA\n");

        assert_eq!(
            out,
            "mode: textToHex\n\
             error: unknown conversion mode \"textToOctal\"\n\
             = 41\n"
        );
    }

    #[test]
    fn lists_modes() {
        let out = run_session(Mode::Base64ToText, ":modes\n");

        assert!(out.contains("* base64ToText  Base64 to Text\n"), "{out}");
        assert!(out.contains("  textToBinary  Text to Binary\n"), "{out}");
        assert_eq!(out.lines().count(), 9);
    }
}
