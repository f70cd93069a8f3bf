//! Sink abstraction and the fan-out set the dispatcher writes to.
//!
//! A [`Sink`] receives already-admitted, already-transformed [`Record`]s and
//! does no level filtering of its own. [`SinkSet`] forwards each record to
//! every sink and is the boundary where write failures stop: they are
//! counted in [`SinkFailures`], reported through `tracing`, and never
//! returned to the caller of `log()`.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::SinkError;
use crate::level::Level;

/// A named metadata value passed along with a log call.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub key: String,
    pub value: Value,
}

impl Param {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One admitted message as handed to the sinks.
///
/// The timestamp is taken once per call so every sink prints the same
/// instant.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub level: Level,
    pub message: &'a str,
    pub params: &'a [Param],
    pub timestamp: DateTime<Utc>,
}

impl<'a> Record<'a> {
    pub fn new(level: Level, message: &'a str, params: &'a [Param]) -> Self {
        Self {
            level,
            message,
            params,
            timestamp: Utc::now(),
        }
    }
}

/// An output destination.
pub trait Sink: Send + Sync {
    /// Short identifier used in diagnostics (`"file"`, `"console"`).
    fn name(&self) -> &'static str;

    /// Accept one record. Implementations may queue the actual I/O; they
    /// must preserve the order of calls made from one thread.
    fn write(&self, record: &Record<'_>) -> Result<(), SinkError>;

    /// Block until everything written so far has reached the underlying
    /// stream.
    fn flush(&self) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Shared failure counter and side channel for sink write errors.
///
/// Sinks that write asynchronously hold a clone of the `Arc` and report
/// from their writer thread; [`SinkSet`] reports synchronous failures.
pub struct SinkFailures {
    count: AtomicU64,
    fallback: Mutex<Box<dyn Write + Send>>,
}

impl SinkFailures {
    /// Failure channel whose fatal fallback is stderr.
    pub fn new() -> Self {
        Self::with_fallback(Box::new(io::stderr()))
    }

    /// Failure channel that rescues fatal lines into `out`.
    pub fn with_fallback(out: Box<dyn Write + Send>) -> Self {
        Self {
            count: AtomicU64::new(0),
            fallback: Mutex::new(out),
        }
    }

    /// Count a failure and surface it as a `tracing` warning.
    pub fn report(&self, error: &SinkError) {
        let failures = self.count.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::warn!(%error, failures, "log sink failure");
    }

    /// Fatal records that a sink could not deliver go to the fallback stream
    /// instead of being lost. Other levels are dropped.
    pub fn fallback(&self, level: Level, line: &str) {
        if level != Level::Fatal {
            return;
        }
        let mut out = match self.fallback.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = writeln!(out, "{line}").and_then(|()| out.flush());
    }

    /// Total failures reported so far.
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}

impl Default for SinkFailures {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SinkFailures {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinkFailures")
            .field("count", &self.count())
            .finish_non_exhaustive()
    }
}

/// The sinks a dispatcher fans out to.
pub struct SinkSet {
    sinks: Vec<Box<dyn Sink>>,
    failures: Arc<SinkFailures>,
}

impl SinkSet {
    pub fn new(failures: Arc<SinkFailures>) -> Self {
        Self {
            sinks: Vec::new(),
            failures,
        }
    }

    pub fn push(&mut self, sink: Box<dyn Sink>) {
        self.sinks.push(sink);
    }

    pub fn with(mut self, sink: impl Sink + 'static) -> Self {
        self.push(Box::new(sink));
        self
    }

    /// Forward `record` to every sink. Failures are reported, not returned.
    pub fn write(&self, record: &Record<'_>) {
        for sink in &self.sinks {
            if let Err(error) = sink.write(record) {
                self.failures.report(&error);
                self.failures.fallback(record.level, &record.to_string());
            }
        }
    }

    pub fn flush(&self) {
        for sink in &self.sinks {
            if let Err(error) = sink.flush() {
                self.failures.report(&error);
            }
        }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.sinks.iter().map(|sink| sink.name()).collect()
    }

    pub fn failures(&self) -> &Arc<SinkFailures> {
        &self.failures
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl std::fmt::Debug for SinkSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinkSet")
            .field("sinks", &self.names())
            .field("failures", &self.failures.count())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
