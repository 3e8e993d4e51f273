//! Console appender writing each record to stderr in one go.
//!
//! Stdout is reserved for converted text, so log output never goes there.
//!
//! This appender type is available as `"default"` in the configuration.

use std::io::{self, Write as _};

use arrayvec::ArrayVec;
use log::Record;
use log4rs::append::Append;
use log4rs::config::{Deserialize, Deserializers};
use log4rs::encode::{self, Encode, EncoderConfig, Style};

use super::{WRITE_BUF_SIZE, color_override, term};

#[derive(Debug)]
pub struct DefaultAppender {
    encoder: Box<dyn Encode>,
    color: bool,
}

impl Append for DefaultAppender {
    fn append(&self, record: &Record<'_>) -> anyhow::Result<()> {
        let mut writer = RecordWriter::new(io::stderr().lock(), self.color);
        self.encoder.encode(&mut writer, record)?;
        Ok(writer.flush()?)
    }

    fn flush(&self) {
        _ = io::stderr().flush();
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct DefaultAppenderConfig {
    color: Option<bool>,
    encoder: EncoderConfig,
}

pub struct DefaultAppenderDeserializer;

impl Deserialize for DefaultAppenderDeserializer {
    type Trait = dyn Append;
    type Config = DefaultAppenderConfig;

    fn deserialize(
        &self,
        config: Self::Config,
        deserializers: &Deserializers,
    ) -> anyhow::Result<Box<Self::Trait>> {
        let encoder = deserializers.deserialize(&config.encoder.kind, config.encoder.config)?;

        // `--color` beats the config, which beats detection
        let color = color_override()
            .or(config.color)
            .unwrap_or_else(|| term::supports_ansi_escapes(&io::stderr()));

        Ok(Box::new(DefaultAppender { encoder, color }))
    }
}

/// Collects one encoded record in a stack buffer before passing it on.
///
/// Writes that don't fit the buffer flush it first. Writes larger than the
/// whole buffer go straight to `out`.
#[derive(Debug)]
struct RecordWriter<W> {
    out: W,
    color: bool,
    buf: ArrayVec<u8, WRITE_BUF_SIZE>,
}

impl<W: io::Write> RecordWriter<W> {
    const fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            buf: ArrayVec::new_const(),
        }
    }
}

impl<W: io::Write> io::Write for RecordWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.buf.remaining_capacity() < buf.len() {
            self.out.write_all(&self.buf)?;
            self.buf.clear();
        }

        if buf.len() > self.buf.capacity() {
            self.out.write_all(buf)?;
        } else {
            self.buf.write_all(buf)?;
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.write_all(&self.buf)?;
        self.buf.clear();
        self.out.flush()
    }
}

impl<W: io::Write> encode::Write for RecordWriter<W> {
    fn set_style(&mut self, style: &Style) -> io::Result<()> {
        if self.color {
            term::write_style(self, style)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use log4rs::encode::Color;
    use log4rs::encode::Write as _;

    use super::*;

    fn written(writer: RecordWriter<Vec<u8>>) -> String {
        String::from_utf8(writer.out).expect("output is utf-8")
    }

    #[test]
    fn buffers_until_flush() {
        let mut writer = RecordWriter::new(Vec::new(), false);
        writer.write_all(b"hello").expect("write to Vec cannot fail");
        assert!(writer.out.is_empty());

        writer.flush().expect("write to Vec cannot fail");
        assert_eq!(written(writer), "hello");
    }

    #[test]
    fn oversized_write_keeps_order() {
        let large = "x".repeat(WRITE_BUF_SIZE + 1);

        let mut writer = RecordWriter::new(Vec::new(), false);
        writer.write_all(b"head ").expect("write to Vec cannot fail");
        writer.write_all(large.as_bytes()).expect("write to Vec cannot fail");
        writer.write_all(b" tail").expect("write to Vec cannot fail");
        writer.flush().expect("write to Vec cannot fail");

        assert_eq!(written(writer), format!("head {large} tail"));
    }

    #[test]
    fn styles_only_with_color() {
        let mut style = Style::new();
        style.text(Color::Red).intense(true);

        let mut plain = RecordWriter::new(Vec::new(), false);
        plain.set_style(&style).expect("write to Vec cannot fail");
        plain.write_all(b"warn").expect("write to Vec cannot fail");
        plain.flush().expect("write to Vec cannot fail");
        assert_eq!(written(plain), "warn");

        let mut colored = RecordWriter::new(Vec::new(), true);
        colored.set_style(&style).expect("write to Vec cannot fail");
        colored.write_all(b"warn").expect("write to Vec cannot fail");
        colored.flush().expect("write to Vec cannot fail");
        assert_eq!(written(colored), "\x1b[0m\x1b[31m\x1b[1mwarn");
    }
}
