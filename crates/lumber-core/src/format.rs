//! Line format shared by every sink.
//!
//! ```text
//! 2026-10-18T09:14:03.512Z - warning: db: connection slow attempt=3, host=db1
//! ```
//!
//! Timestamp (RFC 3339, UTC, milliseconds), ` - `, level, `: `, message and,
//! when present, the params as `key=value` pairs joined by `, `. String
//! values are written bare; everything else in compact JSON.

use std::fmt::{self, Write};

use chrono::SecondsFormat;
use serde_json::Value;

use crate::sink::{Param, Record};

/// Write one line for `record` (no trailing newline). `level` is whatever
/// the sink wants printed in the level slot, e.g. a colorized name.
pub fn write_line<W: Write>(out: &mut W, record: &Record<'_>, level: &dyn fmt::Display) -> fmt::Result {
    write!(
        out,
        "{} - {}: {}",
        record.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        level,
        record.message
    )?;
    write_params(out, record.params)
}

fn write_params<W: Write>(out: &mut W, params: &[Param]) -> fmt::Result {
    for (i, param) in params.iter().enumerate() {
        out.write_str(if i == 0 { " " } else { ", " })?;
        match &param.value {
            Value::String(s) => write!(out, "{}={}", param.key, s)?,
            other => write!(out, "{}={}", param.key, other)?,
        }
    }
    Ok(())
}

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_line(f, self, &self.level)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
