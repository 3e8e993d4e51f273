//! Terminal color detection and the ANSI escapes used by the console appender.

use std::io;

use log4rs::encode::{Color, Style};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Performs automatic detection of whether ANSI escape codes are supported.
pub fn supports_ansi_escapes<T: io::IsTerminal>(stream: &T) -> bool {
    use anstyle_query as a;

    let clicolor = a::clicolor();
    if a::no_color() {
        false
    } else if a::clicolor_force() {
        true
    } else if clicolor == Some(false) {
        false
    } else {
        stream.is_terminal() && (a::term_supports_color() || clicolor == Some(true) || a::is_ci())
    }
}

/// Writes the escapes resetting the terminal to `style`.
pub fn write_style<W: io::Write>(out: &mut W, style: &Style) -> io::Result<()> {
    out.write_all(RESET.as_bytes())?;

    if let Some(text) = style.text {
        out.write_all(foreground(text).as_bytes())?;
    }

    if let Some(color) = style.background {
        out.write_all(background(color).as_bytes())?;
    }

    if style.intense == Some(true) {
        out.write_all(BOLD.as_bytes())?;
    }

    Ok(())
}

const fn foreground(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::White => "\x1b[37m",
    }
}

const fn background(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[40m",
        Color::Red => "\x1b[41m",
        Color::Green => "\x1b[42m",
        Color::Yellow => "\x1b[43m",
        Color::Blue => "\x1b[44m",
        Color::Magenta => "\x1b[45m",
        Color::Cyan => "\x1b[46m",
        Color::White => "\x1b[47m",
    }
}
