//! Call-counting test doubles for sinks and hooks.

use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use lumber_core::{Level, Param, Record, Sink, SinkError};

/// Owned copy of a [`Record`] as seen by a spy.
#[derive(Debug, Clone, PartialEq)]
pub struct Captured {
    pub level: Level,
    pub message: String,
    pub params: Vec<Param>,
    pub line: String,
}

/// Shared log of everything a [`SpySink`] received.
#[derive(Debug, Default)]
pub struct SpyLog {
    records: Mutex<Vec<Captured>>,
    flushes: AtomicUsize,
}

impl SpyLog {
    pub fn records(&self) -> Vec<Captured> {
        self.records.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records().into_iter().map(|r| r.message).collect()
    }

    pub fn writes(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn flushes(&self) -> usize {
        self.flushes.load(Ordering::SeqCst)
    }
}

/// Sink that records every write.
pub struct SpySink {
    name: &'static str,
    log: Arc<SpyLog>,
}

impl SpySink {
    pub fn new(name: &'static str) -> (Self, Arc<SpyLog>) {
        let log = Arc::new(SpyLog::default());
        (
            Self {
                name,
                log: Arc::clone(&log),
            },
            log,
        )
    }
}

impl Sink for SpySink {
    fn name(&self) -> &'static str {
        self.name
    }

    fn write(&self, record: &Record<'_>) -> Result<(), SinkError> {
        self.log.records.lock().unwrap().push(Captured {
            level: record.level,
            message: record.message.to_string(),
            params: record.params.to_vec(),
            line: record.to_string(),
        });
        Ok(())
    }

    fn flush(&self) -> Result<(), SinkError> {
        self.log.flushes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Sink whose every write fails, as if the disk had filled up.
pub struct FailingSink;

impl Sink for FailingSink {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn write(&self, _record: &Record<'_>) -> Result<(), SinkError> {
        Err(SinkError::Write {
            sink: "failing",
            source: std::io::Error::other("no space left on device"),
        })
    }
}

/// In-memory stream standing in for stderr; clones share the buffer.
#[derive(Debug, Clone, Default)]
pub struct Captive(Arc<Mutex<Vec<u8>>>);

impl Captive {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Captive {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Counter shared with a hook closure.
#[derive(Debug, Clone, Default)]
pub struct HookCounter(Arc<AtomicUsize>);

impl HookCounter {
    /// A `logger:msg` transform that counts calls and appends `tag`.
    pub fn tagging(&self, tag: &'static str) -> impl Fn(String) -> String + Send + Sync + 'static {
        let calls = Arc::clone(&self.0);
        move |message| {
            calls.fetch_add(1, Ordering::SeqCst);
            format!("{message}{tag}")
        }
    }

    pub fn calls(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}
