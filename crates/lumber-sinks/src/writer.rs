//! Background writer — one thread per sink, fed by an unbounded FIFO.
//!
//! Callers never block on I/O: [`BackgroundWriter::send`] pushes a rendered
//! line onto a `tokio` unbounded channel and returns. The worker drains
//! whatever is queued, writes it through a `BufWriter`, and flushes once the
//! queue is empty. A single channel per sink keeps lines from one thread in
//! call order.
//!
//! Write failures are handled on the worker: reported to the shared
//! [`SinkFailures`] and, for fatal lines, copied to its fallback stream.
//! A batch that failed to flush is dropped, never retried, so a rescued
//! line cannot also show up late in the output.

use std::io::{self, BufWriter, Write};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use lumber_core::{Level, SinkError, SinkFailures};
use tokio::sync::{mpsc, oneshot};

enum Command {
    Line { level: Level, text: String },
    Flush(oneshot::Sender<()>),
}

/// Byte budget for one session's writes. The worker warns once when it is
/// crossed; nothing rotates or stops.
#[derive(Debug, Clone, Copy)]
pub struct SizeCeiling {
    pub max: u64,
    pub written: u64,
}

impl SizeCeiling {
    pub fn new(max: u64) -> Self {
        Self { max, written: 0 }
    }

    /// Account for `bytes`; true exactly once, on the write that crosses
    /// `max`.
    fn add(&mut self, bytes: u64) -> bool {
        let before = self.written;
        self.written = self.written.saturating_add(bytes);
        before <= self.max && self.written > self.max
    }
}

pub struct BackgroundWriter {
    sink: &'static str,
    tx: Option<mpsc::UnboundedSender<Command>>,
    worker: Option<JoinHandle<()>>,
}

impl BackgroundWriter {
    pub fn spawn(
        sink: &'static str,
        out: Box<dyn Write + Send>,
        failures: Arc<SinkFailures>,
        ceiling: Option<SizeCeiling>,
    ) -> Result<Self, SinkError> {
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = Worker {
            sink,
            out: BufWriter::new(out),
            failures,
            ceiling,
            dirty: false,
            pending_fatal: Vec::new(),
        };
        let handle = thread::Builder::new()
            .name(format!("lumber-{sink}"))
            .spawn(move || worker.run(rx))
            .map_err(|source| SinkError::Spawn { sink, source })?;
        Ok(Self {
            sink,
            tx: Some(tx),
            worker: Some(handle),
        })
    }

    pub fn send(&self, level: Level, text: String) -> Result<(), SinkError> {
        self.command(Command::Line { level, text })
    }

    /// Block until every line sent before this call has been flushed.
    pub fn flush(&self) -> Result<(), SinkError> {
        let (ack, done) = oneshot::channel();
        self.command(Command::Flush(ack))?;
        done.blocking_recv()
            .map_err(|_| SinkError::Closed { sink: self.sink })
    }

    fn command(&self, command: Command) -> Result<(), SinkError> {
        let closed = || SinkError::Closed { sink: self.sink };
        self.tx
            .as_ref()
            .ok_or_else(closed)?
            .send(command)
            .map_err(|_| closed())
    }
}

impl Drop for BackgroundWriter {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain and exit.
        drop(self.tx.take());
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::error!(sink = self.sink, "log writer thread panicked");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Worker
// ---------------------------------------------------------------------------

struct Worker {
    sink: &'static str,
    out: BufWriter<Box<dyn Write + Send>>,
    failures: Arc<SinkFailures>,
    ceiling: Option<SizeCeiling>,
    /// Lines buffered since the last flush attempt.
    dirty: bool,
    /// Fatal lines written into the buffer since the last flush attempt.
    pending_fatal: Vec<String>,
}

impl Worker {
    fn run(mut self, mut rx: mpsc::UnboundedReceiver<Command>) {
        while let Some(command) = rx.blocking_recv() {
            self.handle(command);
            while let Ok(command) = rx.try_recv() {
                self.handle(command);
            }
            self.flush();
        }
        self.flush();
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::Line { level, text } => self.write_line(level, text),
            Command::Flush(ack) => {
                self.flush();
                let _ = ack.send(());
            }
        }
    }

    fn write_line(&mut self, level: Level, text: String) {
        if let Err(source) = writeln!(self.out, "{text}") {
            self.fail(source);
            self.failures.fallback(level, &text);
            return;
        }
        self.dirty = true;
        if let Some(ceiling) = self.ceiling.as_mut() {
            if ceiling.add(text.len() as u64 + 1) {
                tracing::warn!(
                    sink = self.sink,
                    max = ceiling.max,
                    written = ceiling.written,
                    "log file passed its advisory size ceiling"
                );
            }
        }
        if level == Level::Fatal {
            self.pending_fatal.push(text);
        }
    }

    fn flush(&mut self) {
        if !self.dirty {
            return;
        }
        match self.out.flush() {
            Ok(()) => {
                self.dirty = false;
                self.pending_fatal.clear();
            }
            Err(source) => self.fail(source),
        }
    }

    /// Report `source`, drop whatever is still buffered and rescue the fatal
    /// lines that were in it.
    fn fail(&mut self, source: io::Error) {
        self.failures.report(&SinkError::Write {
            sink: self.sink,
            source,
        });
        let placeholder: Box<dyn Write + Send> = Box::new(io::sink());
        let stale = std::mem::replace(&mut self.out, BufWriter::new(placeholder));
        let (inner, _unwritten) = stale.into_parts();
        self.out = BufWriter::new(inner);
        self.dirty = false;
        for line in self.pending_fatal.drain(..) {
            self.failures.fallback(Level::Fatal, &line);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
