use std::io::{self, Read as _, Write as _};
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::Args;
use text_convert::Mode;

use crate::config::Config;

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// The conversion mode, i.e. `textToBinary` or `hex-to-text`.
    ///
    /// Defaults to the configured mode.
    #[arg(short, long)]
    mode: Option<Mode>,

    /// The text to convert.
    ///
    /// If omitted, it is read from stdin, without the final line break.
    text: Option<String>,
}

impl ConvertArgs {
    pub fn run(self, config: &Config) -> Result<ExitCode> {
        let mode = self.mode.unwrap_or(config.converter.mode);
        let text = match self.text {
            Some(text) => text,
            None => read_stdin()?,
        };

        let result = text_convert::convert(&text, mode);
        if let Some(warning) = &result.warning {
            log::warn!("{warning}");
            return Ok(ExitCode::FAILURE);
        }

        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", result.output).context("cannot write output")?;
        Ok(ExitCode::SUCCESS)
    }
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("cannot read input from stdin")?;

    trim_line_break(&mut text);
    Ok(text)
}

fn trim_line_break(text: &mut String) {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::trim_line_break;

    fn trimmed(text: &str) -> String {
        let mut text = text.to_owned();
        trim_line_break(&mut text);
        text
    }

    #[test]
    fn trims_single_line_break() {
        assert_eq!(trimmed("hello\n"), "hello");
        assert_eq!(trimmed("hello\r\n"), "hello");
        assert_eq!(trimmed("hello\n\n"), "hello\n");
        assert_eq!(trimmed("hello"), "hello");
        assert_eq!(trimmed(""), "");
    }
}
