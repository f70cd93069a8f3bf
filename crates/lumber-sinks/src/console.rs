//! Console sink — the optional colorized mirror on stdout.
//!
//! Same line format as the file sink; only the level name is colored,
//! using the color from the level registry.

use std::io::Write;
use std::sync::Arc;

use crossterm::style::{self, Stylize};
use lumber_core::format::write_line;
use lumber_core::{Color, Record, Sink, SinkError, SinkFailures};

use crate::writer::BackgroundWriter;

pub struct ConsoleSink {
    writer: BackgroundWriter,
}

impl ConsoleSink {
    pub fn stdout(failures: Arc<SinkFailures>) -> Result<Self, SinkError> {
        Self::new(Box::new(std::io::stdout()), failures)
    }

    /// Console sink over an arbitrary stream.
    pub fn new(out: Box<dyn Write + Send>, failures: Arc<SinkFailures>) -> Result<Self, SinkError> {
        Ok(Self {
            writer: BackgroundWriter::spawn("console", out, failures, None)?,
        })
    }
}

pub(crate) fn terminal_color(color: Color) -> style::Color {
    match color {
        Color::Red => style::Color::Red,
        Color::Yellow => style::Color::Yellow,
        Color::Green => style::Color::Green,
        Color::Blue => style::Color::Blue,
    }
}

/// Render `record` with its level name colorized.
pub fn render(record: &Record<'_>) -> String {
    let level = record.level.name().with(terminal_color(record.level.color()));
    let mut line = String::new();
    // Writing into a String cannot fail.
    let _ = write_line(&mut line, record, &level);
    line
}

impl Sink for ConsoleSink {
    fn name(&self) -> &'static str {
        "console"
    }

    fn write(&self, record: &Record<'_>) -> Result<(), SinkError> {
        self.writer.send(record.level, render(record))
    }

    fn flush(&self) -> Result<(), SinkError> {
        self.writer.flush()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
